//! Frame buffers checked out of the SDK and typed views over their pixel data.

use std::marker::PhantomData;
use std::os::raw::c_void;
use std::ptr::NonNull;

use arducam_tof_sys::{self as sys, ArducamApi};
use ndarray::{Array2, ArrayView2};

use crate::camera::DepthCamera;
use crate::common::FrameType;
use crate::error::{ArducamError, Result};

/// Per-type format descriptor of a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameFormat {
    pub width: u16,
    pub height: u16,
    pub frame_type: FrameType,
    /// Capture timestamp as reported by the SDK.
    pub timestamp: u64,
}

impl FrameFormat {
    pub(crate) fn from_raw(raw: &sys::ArducamFrameFormat) -> Result<Self> {
        Ok(FrameFormat {
            width: raw.width,
            height: raw.height,
            frame_type: FrameType::try_from(raw.type_)?,
            timestamp: raw.timestamp,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A frame checked out of the SDK with `arducamCameraRequestFrame`.
///
/// The buffer is handed back with `arducamCameraReleaseFrame` when dropped (or through
/// [`FrameBuffer::release`]). Pixel views borrow the buffer, so they cannot outlive the
/// release. The buffer borrows the camera, which therefore cannot be stopped or closed
/// while a frame is checked out.
pub struct FrameBuffer<'cam> {
    api: &'static ArducamApi,
    camera: NonNull<c_void>,
    handle: NonNull<c_void>,
    stream_type: FrameType,
    released: bool,
    _camera: PhantomData<&'cam DepthCamera>,
}

impl<'cam> FrameBuffer<'cam> {
    pub(crate) fn new(
        api: &'static ArducamApi,
        camera: NonNull<c_void>,
        handle: NonNull<c_void>,
        stream_type: FrameType,
    ) -> Self {
        Self {
            api,
            camera,
            handle,
            stream_type,
            released: false,
            _camera: PhantomData,
        }
    }

    /// Frame type the camera was streaming when this frame was requested.
    pub fn frame_type(&self) -> FrameType {
        self.stream_type
    }

    /// Format of the data of `frame_type` contained in this buffer.
    pub fn format(&self, frame_type: FrameType) -> Result<FrameFormat> {
        let raw = unsafe { (self.api.get_format)(self.handle.as_ptr(), frame_type.as_raw()) };
        FrameFormat::from_raw(&raw)
    }

    /// Timestamp of the streamed frame type.
    pub fn timestamp(&self) -> Result<u64> {
        Ok(self.format(self.stream_type)?.timestamp)
    }

    /// Depth values, one `f32` per pixel.
    pub fn depth(&self) -> Result<FrameData<'_, f32>> {
        self.data(FrameType::Depth, self.api.get_depth_data)
    }

    /// Confidence values, one `f32` per pixel. Called amplitude by the 0.1.3 SDK.
    pub fn confidence(&self) -> Result<FrameData<'_, f32>> {
        #[cfg(not(feature = "v0-1-3"))]
        let getter = self.api.get_confidence_data;
        #[cfg(feature = "v0-1-3")]
        let getter = self.api.get_amplitude_data;
        self.data(FrameType::Confidence, getter)
    }

    /// Raw sensor samples, one `i16` per pixel.
    pub fn raw(&self) -> Result<FrameData<'_, i16>> {
        self.data(FrameType::Raw, self.api.get_raw_data)
    }

    fn data<T>(
        &self,
        frame_type: FrameType,
        getter: unsafe extern "C" fn(sys::ArducamFrameBuffer) -> *mut c_void,
    ) -> Result<FrameData<'_, T>> {
        let ptr = unsafe { getter(self.handle.as_ptr()) };
        if ptr.is_null() {
            return Err(ArducamError::MissingData(frame_type));
        }
        if ptr.align_offset(std::mem::align_of::<T>()) != 0 {
            return Err(ArducamError::MisalignedData(frame_type));
        }

        let format = self.format(frame_type)?;
        let width = format.width as usize;
        let height = format.height as usize;
        // SAFETY: the SDK keeps `width * height` samples behind the pointer until this
        // buffer is released, and the returned view borrows `self`.
        let data = unsafe { std::slice::from_raw_parts(ptr as *const T, width * height) };
        FrameData::new(width, height, data)
    }

    /// Hands the buffer back to the SDK, reporting the status.
    pub fn release(mut self) -> Result<()> {
        self.release_inner()
    }

    fn release_inner(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        let status = unsafe { (self.api.release_frame)(self.camera.as_ptr(), self.handle.as_ptr()) };
        ArducamError::check("arducamCameraReleaseFrame", status)
    }
}

impl Drop for FrameBuffer<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.release_inner() {
            log::warn!("failed to release frame buffer: {err}");
        }
    }
}

impl std::fmt::Debug for FrameBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("handle", &self.handle)
            .field("frame_type", &self.stream_type)
            .finish()
    }
}

/// A row-major view over frame data.
///
/// Created by [`FrameBuffer::depth`], [`FrameBuffer::confidence`] or [`FrameBuffer::raw`];
/// the pixels are still owned by the frame buffer.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a, T> {
    width: usize,
    height: usize,
    data: &'a [T],
}

impl<'a, T> FrameData<'a, T> {
    /// Wraps a row-major slice of `width * height` samples.
    pub fn new(width: usize, height: usize, data: &'a [T]) -> Result<Self> {
        if data.len() != width * height {
            return Err(ArducamError::DimensionMismatch {
                expected: (width, height),
                actual: (data.len(), 1),
            });
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// One row of pixels, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// `(height, width)` array view of the frame.
    pub fn as_array(&self) -> ArrayView2<'a, T> {
        // SAFETY: `new` guarantees `data.len() == width * height`.
        unsafe { ArrayView2::from_shape_ptr((self.height, self.width), self.data.as_ptr()) }
    }
}

impl<T: Copy> FrameData<'_, T> {
    /// Pixel value at column `x`, row `y`, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(x + y * self.width).copied()
    }

    /// Copies the pixels out so they survive the frame release.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    pub fn to_owned_array(&self) -> Array2<T> {
        self.as_array().to_owned()
    }
}

impl<'a, 'b, T> IntoIterator for &'b FrameData<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_data_indexing_is_row_major() {
        let pixels: Vec<f32> = (0..12).map(|v| v as f32).collect();
        let frame = FrameData::new(4, 3, &pixels).unwrap();
        assert_eq!(frame.get(0, 0), Some(0.0));
        assert_eq!(frame.get(3, 0), Some(3.0));
        assert_eq!(frame.get(1, 2), Some(9.0));
        assert_eq!(frame.get(4, 0), None);
        assert_eq!(frame.get(0, 3), None);
        assert_eq!(frame.row(1), Some(&pixels[4..8]));
        assert_eq!(frame.row(3), None);
    }

    #[test]
    fn frame_data_rejects_wrong_length() {
        let pixels = [0i16; 5];
        assert!(matches!(
            FrameData::new(2, 3, &pixels),
            Err(ArducamError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn array_view_has_height_width_shape() {
        let pixels: Vec<i16> = (0..6).collect();
        let frame = FrameData::new(3, 2, &pixels).unwrap();
        let view = frame.as_array();
        assert_eq!(view.shape(), &[2, 3]);
        assert_eq!(view[[1, 0]], 3);
        assert_eq!(frame.to_owned_array()[[1, 2]], 5);
    }

    #[test]
    fn iterates_all_pixels() {
        let pixels = [1.0f32, 2.0, 3.0, 4.0];
        let frame = FrameData::new(2, 2, &pixels).unwrap();
        let sum: f32 = (&frame).into_iter().sum();
        assert_eq!(sum, 10.0);
        assert_eq!(frame.iter().count(), 4);
    }

    #[test]
    fn format_decodes_frame_type() {
        let raw = sys::ArducamFrameFormat {
            width: 240,
            height: 180,
            type_: sys::ArducamFrameType_DEPTH_FRAME,
            timestamp: 77,
        };
        let format = FrameFormat::from_raw(&raw).unwrap();
        assert_eq!(format.frame_type, FrameType::Depth);
        assert_eq!(format.pixel_count(), 43_200);

        let bad = sys::ArducamFrameFormat { type_: 99, ..raw };
        assert!(FrameFormat::from_raw(&bad).is_err());
    }
}
