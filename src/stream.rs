//! Point-cloud streaming over any byte stream (typically a `TcpStream`).
//!
//! Each message is a little-endian `u32` length followed by that many bytes of
//! bincode (standard configuration) encoding one [`PointCloud`].

use std::io::{self, Read, Write};

use crate::error::Result;
use crate::pointcloud::PointCloud;

/// Largest message a receiver accepts. A 640x480 cloud is about 5 MiB.
pub const MAX_MESSAGE_LEN: usize = 64 * 1024 * 1024;

/// Standard configuration, with decoded containers bounded by [`MAX_MESSAGE_LEN`].
fn wire_config() -> impl bincode::config::Config {
    bincode::config::standard().with_limit::<MAX_MESSAGE_LEN>()
}

/// Writes point clouds to `W`.
#[derive(Debug)]
pub struct PointCloudSender<W: Write> {
    writer: W,
}

impl<W: Write> PointCloudSender<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn send(&mut self, cloud: &PointCloud) -> Result<()> {
        let payload = bincode::encode_to_vec(cloud, wire_config())?;
        let len = u32::try_from(payload.len())
            .ok()
            .filter(|&len| len as usize <= MAX_MESSAGE_LEN)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("point cloud message of {} bytes is too large", payload.len()),
                )
            })?;
        self.writer.write_all(&len.to_le_bytes())?;
        self.writer.write_all(&payload)?;
        self.writer.flush()?;
        log::trace!("sent {} points ({len} bytes)", cloud.len());
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reads point clouds written by a [`PointCloudSender`] from `R`.
#[derive(Debug)]
pub struct PointCloudReceiver<R: Read> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: Read> PointCloudReceiver<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }

    /// Next point cloud, or `Ok(None)` if the stream ended between two messages.
    /// A stream that ends inside a message is an error.
    pub fn recv(&mut self) -> Result<Option<PointCloud>> {
        let mut header = [0u8; 4];
        if !read_header(&mut self.reader, &mut header)? {
            log::debug!("point cloud stream closed");
            return Ok(None);
        }

        let len = u32::from_le_bytes(header) as usize;
        if len > MAX_MESSAGE_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("point cloud message of {len} bytes exceeds {MAX_MESSAGE_LEN}"),
            )
            .into());
        }

        self.buffer.resize(len, 0);
        self.reader.read_exact(&mut self.buffer)?;
        let (cloud, consumed) = bincode::decode_from_slice(&self.buffer, wire_config())?;
        if consumed != len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("point cloud message has {} trailing bytes", len - consumed),
            )
            .into());
        }
        Ok(Some(cloud))
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for PointCloudReceiver<R> {
    type Item = Result<PointCloud>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv().transpose()
    }
}

/// Fills `header`; `false` if the stream was already at its end.
fn read_header(reader: &mut impl Read, header: &mut [u8; 4]) -> io::Result<bool> {
    let mut filled = 0;
    while filled < header.len() {
        match reader.read(&mut header[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stream ended inside a message header",
                ));
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(true)
}
