//! Safe Rust wrapper for an Arducam ToF camera handle

use std::os::raw::{c_int, c_void};
use std::ptr::NonNull;
use std::time::Duration;

use arducam_tof_sys::{self as sys, ArducamApi};

use crate::common::{Connection, Control, FrameType, RangeMode};
use crate::error::{ArducamError, Result};
use crate::frame::FrameBuffer;

#[cfg(not(feature = "v0-1-3"))]
use crate::info::CameraInfo;
#[cfg(not(feature = "v0-1-3"))]
use crate::modes::{TofFrameWorkMode, TofWorkMode};

/// Lifecycle of a camera handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    /// Handle allocated, no device bound.
    Created,
    /// Bound to a device, not streaming.
    Opened,
    /// Streaming frames of the given type.
    Streaming(FrameType),
}

/// Owned camera handle.
///
/// Created with [`DepthCamera::new`]. The handle is stopped and closed when dropped;
/// use [`DepthCamera::close`] to observe the close status.
pub struct DepthCamera {
    api: &'static ArducamApi,
    handle: NonNull<c_void>,
    state: CameraState,
    closed: bool,
}

// The SDK hands out plain heap handles; moving one to another thread is fine, sharing
// it between threads is not documented as safe.
unsafe impl Send for DepthCamera {}

impl DepthCamera {
    /// Creates a camera handle through the SDK linked at build time.
    pub fn new() -> Result<Self> {
        let api = sys::linked().ok_or(ArducamError::SdkUnavailable)?;
        // SAFETY: the linked table points at the vendor library.
        unsafe { Self::with_api(api) }
    }

    /// Creates a camera handle through `api`.
    ///
    /// # Safety
    ///
    /// Every function of `api` must honour the contract of the matching vendor function.
    pub unsafe fn with_api(api: &'static ArducamApi) -> Result<Self> {
        let raw = unsafe { (api.create_camera)() };
        let handle = NonNull::new(raw).ok_or(ArducamError::CreateFailed)?;
        log::debug!("created camera handle {:p}", handle);
        Ok(Self {
            api,
            handle,
            state: CameraState::Created,
            closed: false,
        })
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, CameraState::Created)
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self.state, CameraState::Streaming(_))
    }

    /// Frame type being streamed, if any.
    pub fn frame_type(&self) -> Option<FrameType> {
        match self.state {
            CameraState::Streaming(frame_type) => Some(frame_type),
            _ => None,
        }
    }

    /// Binds the handle to the device at `index` (`/dev/video<index>`) over `conn`.
    pub fn open(&mut self, conn: Connection, index: i32) -> Result<()> {
        self.ensure_created()?;
        let status = unsafe { (self.api.open)(self.handle.as_ptr(), conn.as_raw(), index as c_int) };
        ArducamError::check("arducamCameraOpen", status)?;
        self.state = CameraState::Opened;
        log::debug!("opened camera over {conn} (index {index})");
        Ok(())
    }

    /// Binds the handle to the device at `index`, configured from the vendor
    /// configuration file at `path`.
    #[cfg(not(feature = "v0-1-3"))]
    pub fn open_with_file(&mut self, path: impl AsRef<std::path::Path>, index: i32) -> Result<()> {
        self.ensure_created()?;
        let path = path.as_ref();
        let c_path = std::ffi::CString::new(path.as_os_str().as_encoded_bytes())?;
        let status =
            unsafe { (self.api.open_with_file)(self.handle.as_ptr(), c_path.as_ptr(), index as c_int) };
        ArducamError::check("arducamCameraOpenWithFile", status)?;
        self.state = CameraState::Opened;
        log::debug!("opened camera from {} (index {index})", path.display());
        Ok(())
    }

    /// Starts streaming frames of `frame_type`.
    pub fn start(&mut self, frame_type: FrameType) -> Result<()> {
        match self.state {
            CameraState::Created => return Err(ArducamError::NotOpen),
            CameraState::Streaming(current) => return Err(ArducamError::AlreadyStreaming(current)),
            CameraState::Opened => {}
        }
        let status = unsafe { (self.api.start)(self.handle.as_ptr(), frame_type.as_raw()) };
        ArducamError::check("arducamCameraStart", status)?;
        self.state = CameraState::Streaming(frame_type);
        log::debug!("started {frame_type} stream");
        Ok(())
    }

    /// Stops the stream. Frames still checked out keep the camera borrowed, so this can
    /// only be called once they are released.
    pub fn stop(&mut self) -> Result<()> {
        if !self.is_streaming() {
            return Err(ArducamError::NotStreaming);
        }
        let status = unsafe { (self.api.stop)(self.handle.as_ptr()) };
        ArducamError::check("arducamCameraStop", status)?;
        self.state = CameraState::Opened;
        log::debug!("stopped stream");
        Ok(())
    }

    /// Stops the stream if needed and releases the device and the handle.
    pub fn close(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        let stopped = if self.is_streaming() { self.stop() } else { Ok(()) };

        let mut raw = self.handle.as_ptr();
        let status = unsafe { (self.api.close)(&mut raw) };
        self.closed = true;
        log::debug!("closed camera handle {:p}", self.handle);
        stopped.and(ArducamError::check("arducamCameraClose", status))
    }

    /// Static capability and geometry descriptor of the opened module.
    #[cfg(not(feature = "v0-1-3"))]
    pub fn info(&self) -> Result<CameraInfo> {
        self.ensure_open()?;
        let raw = unsafe { (self.api.get_info)(self.handle.as_ptr()) };
        CameraInfo::from_raw(&raw)
    }

    pub fn set_control(&self, control: Control, value: i32) -> Result<()> {
        self.ensure_open()?;
        let status = unsafe { (self.api.set_ctrl)(self.handle.as_ptr(), control.as_raw(), value as c_int) };
        ArducamError::check("arducamCameraSetCtrl", status)?;
        log::trace!("set {control} = {value}");
        Ok(())
    }

    pub fn control(&self, control: Control) -> Result<i32> {
        self.ensure_open()?;
        let mut value: c_int = 0;
        let status = unsafe { (self.api.get_ctrl)(self.handle.as_ptr(), control.as_raw(), &mut value) };
        ArducamError::check("arducamCameraGetCtrl", status)?;
        Ok(value as i32)
    }

    pub fn set_range(&self, range: RangeMode) -> Result<()> {
        self.set_control(Control::Range, range.meters())
    }

    pub fn range(&self) -> Result<RangeMode> {
        RangeMode::try_from(self.control(Control::Range)?)
    }

    /// Requests the next frame.
    ///
    /// `None` blocks until a frame arrives, `Some(Duration::ZERO)` polls, any other
    /// duration is the maximum wait. Returns `Ok(None)` when no frame was available in
    /// time.
    pub fn request_frame(&self, timeout: Option<Duration>) -> Result<Option<FrameBuffer<'_>>> {
        let stream_type = self.frame_type().ok_or(ArducamError::NotStreaming)?;
        let timeout_ms = timeout_to_ms(timeout);
        log::trace!("requesting frame (timeout {timeout_ms} ms)");
        let fb = unsafe { (self.api.request_frame)(self.handle.as_ptr(), timeout_ms) };
        Ok(NonNull::new(fb).map(|fb| FrameBuffer::new(self.api, self.handle, fb, stream_type)))
    }

    /// Polls for a frame without blocking.
    pub fn try_request_frame(&self) -> Result<Option<FrameBuffer<'_>>> {
        self.request_frame(Some(Duration::ZERO))
    }

    fn ensure_created(&self) -> Result<()> {
        if self.is_open() {
            Err(ArducamError::AlreadyOpen)
        } else {
            Ok(())
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(ArducamError::NotOpen)
        }
    }
}

#[cfg(not(feature = "v0-1-3"))]
impl DepthCamera {
    pub fn set_exposure(&self, exposure: i32) -> Result<()> {
        self.set_control(Control::Exposure, exposure)
    }

    pub fn exposure(&self) -> Result<i32> {
        self.control(Control::Exposure)
    }

    pub fn set_frame_rate(&self, fps: i32) -> Result<()> {
        self.set_control(Control::FrameRate, fps)
    }

    pub fn frame_rate(&self) -> Result<i32> {
        self.control(Control::FrameRate)
    }

    pub fn set_work_mode(&self, mode: TofWorkMode) -> Result<()> {
        self.set_control(Control::Mode, mode.as_raw() as i32)
    }

    pub fn work_mode(&self) -> Result<TofWorkMode> {
        let value = self.control(Control::Mode)?;
        TofWorkMode::try_from(enum_value("work mode", value)?)
    }

    pub fn set_frame_mode(&self, mode: TofFrameWorkMode) -> Result<()> {
        self.set_control(Control::FrameMode, mode.as_raw() as i32)
    }

    pub fn frame_mode(&self) -> Result<TofFrameWorkMode> {
        let value = self.control(Control::FrameMode)?;
        TofFrameWorkMode::try_from(enum_value("frame work mode", value)?)
    }

    pub fn set_skip_frame(&self, frames: i32) -> Result<()> {
        self.set_control(Control::SkipFrame, frames)
    }

    pub fn set_skip_frame_loop(&self, frames: i32) -> Result<()> {
        self.set_control(Control::SkipFrameLoop, frames)
    }

    /// Output width currently configured on the device.
    pub fn frame_width(&self) -> Result<i32> {
        self.control(Control::FormatWidth)
    }

    /// Output height currently configured on the device.
    pub fn frame_height(&self) -> Result<i32> {
        self.control(Control::FormatHeight)
    }
}

impl Drop for DepthCamera {
    fn drop(&mut self) {
        if let Err(err) = self.shutdown() {
            log::warn!("failed to close camera: {err}");
        }
    }
}

impl std::fmt::Debug for DepthCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepthCamera")
            .field("handle", &self.handle)
            .field("state", &self.state)
            .finish()
    }
}

/// Encodes a frame request timeout the way the SDK expects it: `-1` waits forever,
/// `0` polls, anything else is a wait in milliseconds (saturating at `i32::MAX`).
pub(crate) fn timeout_to_ms(timeout: Option<Duration>) -> c_int {
    match timeout {
        None => -1,
        Some(timeout) => timeout.as_millis().min(c_int::MAX as u128) as c_int,
    }
}

#[cfg(not(feature = "v0-1-3"))]
fn enum_value(kind: &'static str, value: i32) -> Result<u32> {
    u32::try_from(value).map_err(|_| ArducamError::InvalidEnum {
        kind,
        value: value as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_timeout_is_minus_one() {
        assert_eq!(timeout_to_ms(None), -1);
    }

    #[test]
    fn zero_timeout_polls() {
        assert_eq!(timeout_to_ms(Some(Duration::ZERO)), 0);
    }

    #[test]
    fn timeout_is_in_milliseconds() {
        assert_eq!(timeout_to_ms(Some(Duration::from_millis(200))), 200);
        assert_eq!(timeout_to_ms(Some(Duration::from_micros(1500))), 1);
    }

    #[test]
    fn huge_timeout_saturates() {
        assert_eq!(timeout_to_ms(Some(Duration::from_secs(u64::MAX))), c_int::MAX);
    }

    #[test]
    fn unlinked_build_reports_sdk_unavailable() {
        if sys::linked().is_none() {
            assert!(matches!(DepthCamera::new(), Err(ArducamError::SdkUnavailable)));
        }
    }
}
