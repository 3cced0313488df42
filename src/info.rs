//! Static description of a connected camera module.

use arducam_tof_sys as sys;

use crate::common::{Connection, FrameType};
use crate::error::Result;
use crate::modes::DeviceType;

/// Capability and geometry descriptor returned by `arducamCameraGetInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CameraInfo {
    /// Device node index the camera was opened with.
    pub index: u32,
    pub connection: Connection,
    pub device_type: DeviceType,
    /// Frame type the module is configured to produce.
    pub frame_type: FrameType,
    pub width: u32,
    pub height: u32,
    pub bit_width: u32,
    pub bytes_per_pixel: u32,
}

impl CameraInfo {
    pub(crate) fn from_raw(raw: &sys::ArducamCameraInfo) -> Result<Self> {
        Ok(CameraInfo {
            index: raw.index,
            connection: Connection::try_from(raw.connect)?,
            device_type: DeviceType::try_from(raw.device_type)?,
            frame_type: FrameType::try_from(raw.type_)?,
            width: raw.width,
            height: raw.height,
            bit_width: raw.bit_width,
            bytes_per_pixel: raw.bpp,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size in bytes of one frame at the reported geometry.
    pub fn frame_len(&self) -> usize {
        self.pixel_count() * self.bytes_per_pixel as usize
    }
}
