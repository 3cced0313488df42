//! Declarations of `ArducamDepthCamera.h` as shipped with SDK 0.1.3.
//!
//! Differences with the current header: the confidence frame is called the amplitude
//! frame, there is a single control (range), and neither device info nor
//! configuration-file opening exist.

use std::os::raw::{c_int, c_uint, c_void};

pub type ArducamDepthCamera = *mut c_void;

pub type ArducamFrameBuffer = *mut c_void;

pub type Status = c_int;

pub type ArducamCameraConn = c_uint;
pub const ArducamCameraConn_CSI: ArducamCameraConn = 0;
pub const ArducamCameraConn_USB: ArducamCameraConn = 1;
pub const ArducamCameraConn_CONNECT_COUNT: ArducamCameraConn = 2;

pub type ArducamFrameType = c_uint;
pub const ArducamFrameType_RAW_FRAME: ArducamFrameType = 0;
pub const ArducamFrameType_AMPLITUDE_FRAME: ArducamFrameType = 1;
pub const ArducamFrameType_DEPTH_FRAME: ArducamFrameType = 2;
pub const ArducamFrameType_FRAME_TYPE_COUNT: ArducamFrameType = 3;

pub type ArducamCameraCtrl = c_uint;
pub const ArducamCameraCtrl_ArducamCameraRange: ArducamCameraCtrl = 0;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ArducamFrameFormat {
    pub width: u16,
    pub height: u16,
    pub type_: ArducamFrameType,
    pub timestamp: u64,
}

/// Entry points of the 0.1.3 SDK.
#[derive(Debug, Clone, Copy)]
pub struct ArducamApi {
    pub create_camera: unsafe extern "C" fn() -> ArducamDepthCamera,
    pub open: unsafe extern "C" fn(ArducamDepthCamera, ArducamCameraConn, c_int) -> Status,
    pub close: unsafe extern "C" fn(*mut ArducamDepthCamera) -> Status,
    pub start: unsafe extern "C" fn(ArducamDepthCamera, ArducamFrameType) -> Status,
    pub stop: unsafe extern "C" fn(ArducamDepthCamera) -> Status,
    pub get_format: unsafe extern "C" fn(ArducamFrameBuffer, ArducamFrameType) -> ArducamFrameFormat,
    pub set_ctrl: unsafe extern "C" fn(ArducamDepthCamera, ArducamCameraCtrl, c_int) -> Status,
    pub get_ctrl: unsafe extern "C" fn(ArducamDepthCamera, ArducamCameraCtrl, *mut c_int) -> Status,
    pub request_frame: unsafe extern "C" fn(ArducamDepthCamera, c_int) -> ArducamFrameBuffer,
    pub release_frame: unsafe extern "C" fn(ArducamDepthCamera, ArducamFrameBuffer) -> Status,
    pub get_depth_data: unsafe extern "C" fn(ArducamFrameBuffer) -> *mut c_void,
    pub get_amplitude_data: unsafe extern "C" fn(ArducamFrameBuffer) -> *mut c_void,
    pub get_raw_data: unsafe extern "C" fn(ArducamFrameBuffer) -> *mut c_void,
}

#[cfg(arducam_linked)]
unsafe extern "C" {
    pub fn createArducamDepthCamera() -> ArducamDepthCamera;

    pub fn arducamCameraOpen(camera: ArducamDepthCamera, conn: ArducamCameraConn, path: c_int) -> Status;

    pub fn arducamCameraClose(camera: *mut ArducamDepthCamera) -> Status;

    pub fn arducamCameraStart(camera: ArducamDepthCamera, type_: ArducamFrameType) -> Status;

    pub fn arducamCameraStop(camera: ArducamDepthCamera) -> Status;

    pub fn arducamCameraGetFormat(fb: ArducamFrameBuffer, type_: ArducamFrameType) -> ArducamFrameFormat;

    pub fn arducamCameraSetCtrl(camera: ArducamDepthCamera, id: ArducamCameraCtrl, val: c_int) -> Status;

    pub fn arducamCameraGetCtrl(camera: ArducamDepthCamera, id: ArducamCameraCtrl, val: *mut c_int) -> Status;

    pub fn arducamCameraRequestFrame(camera: ArducamDepthCamera, timeout: c_int) -> ArducamFrameBuffer;

    pub fn arducamCameraReleaseFrame(camera: ArducamDepthCamera, fb: ArducamFrameBuffer) -> Status;

    pub fn arducamCameraGetDepthData(fb: ArducamFrameBuffer) -> *mut c_void;

    pub fn arducamCameraGetAmplitudeData(fb: ArducamFrameBuffer) -> *mut c_void;

    pub fn arducamCameraGetRawData(fb: ArducamFrameBuffer) -> *mut c_void;
}

#[cfg(arducam_linked)]
pub(crate) static LINKED: ArducamApi = ArducamApi {
    create_camera: createArducamDepthCamera,
    open: arducamCameraOpen,
    close: arducamCameraClose,
    start: arducamCameraStart,
    stop: arducamCameraStop,
    get_format: arducamCameraGetFormat,
    set_ctrl: arducamCameraSetCtrl,
    get_ctrl: arducamCameraGetCtrl,
    request_frame: arducamCameraRequestFrame,
    release_frame: arducamCameraReleaseFrame,
    get_depth_data: arducamCameraGetDepthData,
    get_amplitude_data: arducamCameraGetAmplitudeData,
    get_raw_data: arducamCameraGetRawData,
};
