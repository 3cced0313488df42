//! Declarations of `ArducamDepthCamera.h` (current SDK releases).

use std::os::raw::{c_char, c_int, c_uint, c_void};

/// Opaque camera instance returned by [`createArducamDepthCamera`].
pub type ArducamDepthCamera = *mut c_void;

/// Opaque frame buffer returned by [`arducamCameraRequestFrame`].
pub type ArducamFrameBuffer = *mut c_void;

/// Zero on success, a vendor error code otherwise.
pub type Status = c_int;

pub type ArducamConnection = c_uint;
pub const ArducamConnection_CSI: ArducamConnection = 0;
pub const ArducamConnection_USB: ArducamConnection = 1;
pub const ArducamConnection_CONNECT_COUNT: ArducamConnection = 2;

pub type ArducamDeviceType = c_uint;
pub const ArducamDeviceType_ARDUCAM_DEVICE_VGA: ArducamDeviceType = 0;
pub const ArducamDeviceType_ARDUCAM_DEVICE_HQVGA: ArducamDeviceType = 1;

pub type ArducamFrameType = c_uint;
pub const ArducamFrameType_RAW_FRAME: ArducamFrameType = 0;
pub const ArducamFrameType_CONFIDENCE_FRAME: ArducamFrameType = 1;
pub const ArducamFrameType_DEPTH_FRAME: ArducamFrameType = 2;
pub const ArducamFrameType_CACHE_FRAME: ArducamFrameType = 3;
pub const ArducamFrameType_FRAME_TYPE_COUNT: ArducamFrameType = 4;

pub type ArducamControl = c_uint;
/// Only the 4m and 2m range modes are supported.
pub const ArducamControl_ARDUCAM_CONTROL_RANGE: ArducamControl = 0;
pub const ArducamControl_ARDUCAM_CONTROL_FMT_WIDTH: ArducamControl = 1;
pub const ArducamControl_ARDUCAM_CONTROL_FMT_HEIGHT: ArducamControl = 2;
pub const ArducamControl_ARDUCAM_CONTROL_MODE: ArducamControl = 0x10;
pub const ArducamControl_ARDUCAM_CONTROL_FRAME_MODE: ArducamControl = 0x11;
pub const ArducamControl_ARDUCAM_CONTROL_EXPOSURE: ArducamControl = 0x20;
pub const ArducamControl_ARDUCAM_CONTROL_FRAME_RATE: ArducamControl = 0x21;
pub const ArducamControl_ARDUCAM_CONTROL_SKIP_FRAME: ArducamControl = 0x70;
pub const ArducamControl_ARDUCAM_CONTROL_SKIP_FRAME_LOOP: ArducamControl = 0x71;

pub type ArducamTofWorkMode = c_uint;
pub const ArducamTofWorkMode_ARDUCAM_MODE_SINGLE_FREQ: ArducamTofWorkMode = 0;
pub const ArducamTofWorkMode_ARDUCAM_MODE_DOUBLE_FREQ: ArducamTofWorkMode = 1;
pub const ArducamTofWorkMode_ARDUCAM_MODE_TRIPLE_FREQ: ArducamTofWorkMode = 2;
pub const ArducamTofWorkMode_ARDUCAM_MODE_QUAD_FREQ: ArducamTofWorkMode = 3;
pub const ArducamTofWorkMode_ARDUCAM_MODE_DISTANCE: ArducamTofWorkMode = 4;
pub const ArducamTofWorkMode_ARDUCAM_MODE_HDR: ArducamTofWorkMode = 5;
pub const ArducamTofWorkMode_ARDUCAM_MODE_AE: ArducamTofWorkMode = 6;
pub const ArducamTofWorkMode_ARDUCAM_MODE_BG_OUTDOOR: ArducamTofWorkMode = 7;
pub const ArducamTofWorkMode_ARDUCAM_MODE_GRAY_ONLY: ArducamTofWorkMode = 8;
pub const ArducamTofWorkMode_ARDUCAM_MODE_CUSTOM1: ArducamTofWorkMode = 9;
pub const ArducamTofWorkMode_ARDUCAM_MODE_CUSTOM2: ArducamTofWorkMode = 10;
pub const ArducamTofWorkMode_ARDUCAM_MODE_CUSTOM3: ArducamTofWorkMode = 11;

pub type ArducamTofFrameWorkMode = c_uint;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_2PHASE: ArducamTofFrameWorkMode = 0;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE: ArducamTofFrameWorkMode = 1;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE_GRAY: ArducamTofFrameWorkMode = 2;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE_BG: ArducamTofFrameWorkMode = 3;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE_4BG: ArducamTofFrameWorkMode = 4;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE_GRAY_5BG: ArducamTofFrameWorkMode = 5;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_GRAY_BG_4PHASE_GRAY_BG: ArducamTofFrameWorkMode = 6;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_GRAY_BG_4PHASE_BG: ArducamTofFrameWorkMode = 7;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_BG_GRAY_BG_4PHASE: ArducamTofFrameWorkMode = 8;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_BG_4PHASE_BG_GRAY: ArducamTofFrameWorkMode = 9;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_DOUBLE_FREQ_4PHASE: ArducamTofFrameWorkMode = 10;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_DOUBLE_FREQ_4PHASE_GRAY_4PHASE_BG: ArducamTofFrameWorkMode = 11;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_DOUBLE_FREQ_4PHASE_4BG: ArducamTofFrameWorkMode = 12;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_DOUBLE_FREQ_4PHASE_GRAY_5BG: ArducamTofFrameWorkMode = 13;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_TRIPLE_FREQ_4PHASE: ArducamTofFrameWorkMode = 14;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_TRIPLE_FREQ_4PHASE_GRAY_4PHASE_GRAY_4PHASE_BG: ArducamTofFrameWorkMode = 15;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_QUAD_FREQ_4PHASE: ArducamTofFrameWorkMode = 16;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_QUAD_FREQ_4PHASE_GRAY_4PHASE_BG_4PHASE_GRAY_4PHASE_BG: ArducamTofFrameWorkMode = 17;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_BG_OUTDOOR: ArducamTofFrameWorkMode = 18;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_GRAY_ONLY: ArducamTofFrameWorkMode = 19;
pub const ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_CUSTOM: ArducamTofFrameWorkMode = 20;

/// Description of frame data format.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ArducamFrameFormat {
    /// width of frame
    pub width: u16,
    /// height of frame
    pub height: u16,
    /// type of frame
    pub type_: ArducamFrameType,
    /// timestamp of frame
    pub timestamp: u64,
}

/// Basic information of the camera module.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ArducamCameraInfo {
    pub index: c_uint,
    pub connect: ArducamConnection,
    pub device_type: ArducamDeviceType,
    pub type_: ArducamFrameType,
    pub width: c_uint,
    pub height: c_uint,
    pub bit_width: c_uint,
    /// bytes per pixel
    pub bpp: c_uint,
}

/// Entry points of the SDK, one field per function of the header.
///
/// The table returned by [`crate::linked`] points at the native library. A table built
/// by hand must honour the same contracts as the vendor functions.
#[derive(Debug, Clone, Copy)]
pub struct ArducamApi {
    pub create_camera: unsafe extern "C" fn() -> ArducamDepthCamera,
    pub open: unsafe extern "C" fn(ArducamDepthCamera, ArducamConnection, c_int) -> Status,
    pub open_with_file: unsafe extern "C" fn(ArducamDepthCamera, *const c_char, c_int) -> Status,
    pub close: unsafe extern "C" fn(*mut ArducamDepthCamera) -> Status,
    pub start: unsafe extern "C" fn(ArducamDepthCamera, ArducamFrameType) -> Status,
    pub stop: unsafe extern "C" fn(ArducamDepthCamera) -> Status,
    pub get_info: unsafe extern "C" fn(ArducamDepthCamera) -> ArducamCameraInfo,
    pub get_format: unsafe extern "C" fn(ArducamFrameBuffer, ArducamFrameType) -> ArducamFrameFormat,
    pub set_ctrl: unsafe extern "C" fn(ArducamDepthCamera, ArducamControl, c_int) -> Status,
    pub get_ctrl: unsafe extern "C" fn(ArducamDepthCamera, ArducamControl, *mut c_int) -> Status,
    pub request_frame: unsafe extern "C" fn(ArducamDepthCamera, c_int) -> ArducamFrameBuffer,
    pub release_frame: unsafe extern "C" fn(ArducamDepthCamera, ArducamFrameBuffer) -> Status,
    pub get_depth_data: unsafe extern "C" fn(ArducamFrameBuffer) -> *mut c_void,
    pub get_confidence_data: unsafe extern "C" fn(ArducamFrameBuffer) -> *mut c_void,
    pub get_raw_data: unsafe extern "C" fn(ArducamFrameBuffer) -> *mut c_void,
}

#[cfg(arducam_linked)]
unsafe extern "C" {
    /// Create a camera instance.
    pub fn createArducamDepthCamera() -> ArducamDepthCamera;

    /// Initialize the camera configuration and turn on the camera, set the
    /// initialization frame according to `conn`. `index` is the device node (video0 by default).
    pub fn arducamCameraOpen(camera: ArducamDepthCamera, conn: ArducamConnection, index: c_int) -> Status;

    /// Initialize the camera from the configuration file at `path`.
    pub fn arducamCameraOpenWithFile(camera: ArducamDepthCamera, path: *const c_char, index: c_int) -> Status;

    /// Close the camera. Takes the handle by address.
    pub fn arducamCameraClose(camera: *mut ArducamDepthCamera) -> Status;

    /// Start the camera stream and start processing.
    pub fn arducamCameraStart(camera: ArducamDepthCamera, type_: ArducamFrameType) -> Status;

    /// Stop camera stream and processing.
    pub fn arducamCameraStop(camera: ArducamDepthCamera) -> Status;

    /// Static description of the connected module.
    pub fn arducamCameraGetInfo(camera: ArducamDepthCamera) -> ArducamCameraInfo;

    /// Get the format of the specified frame.
    pub fn arducamCameraGetFormat(fb: ArducamFrameBuffer, type_: ArducamFrameType) -> ArducamFrameFormat;

    pub fn arducamCameraSetCtrl(camera: ArducamDepthCamera, id: ArducamControl, val: c_int) -> Status;

    pub fn arducamCameraGetCtrl(camera: ArducamDepthCamera, id: ArducamControl, val: *mut c_int) -> Status;

    /// Read a frame. `timeout` is -1 to wait forever, 0 to poll, otherwise the maximum
    /// wait in milliseconds.
    pub fn arducamCameraRequestFrame(camera: ArducamDepthCamera, timeout: c_int) -> ArducamFrameBuffer;

    /// Return a frame buffer to the library.
    pub fn arducamCameraReleaseFrame(camera: ArducamDepthCamera, fb: ArducamFrameBuffer) -> Status;

    pub fn arducamCameraGetDepthData(fb: ArducamFrameBuffer) -> *mut c_void;

    pub fn arducamCameraGetConfidenceData(fb: ArducamFrameBuffer) -> *mut c_void;

    pub fn arducamCameraGetRawData(fb: ArducamFrameBuffer) -> *mut c_void;
}

#[cfg(arducam_linked)]
pub(crate) static LINKED: ArducamApi = ArducamApi {
    create_camera: createArducamDepthCamera,
    open: arducamCameraOpen,
    open_with_file: arducamCameraOpenWithFile,
    close: arducamCameraClose,
    start: arducamCameraStart,
    stop: arducamCameraStop,
    get_info: arducamCameraGetInfo,
    get_format: arducamCameraGetFormat,
    set_ctrl: arducamCameraSetCtrl,
    get_ctrl: arducamCameraGetCtrl,
    request_frame: arducamCameraRequestFrame,
    release_frame: arducamCameraReleaseFrame,
    get_depth_data: arducamCameraGetDepthData,
    get_confidence_data: arducamCameraGetConfidenceData,
    get_raw_data: arducamCameraGetRawData,
};
