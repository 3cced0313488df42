//! In-process stand-in for `libArducamDepthCamera2c`.
//!
//! Every camera handle created through [`FAKE_API`] shares a [`FakeState`] with the test
//! that created it, so tests can script failures and inspect the calls the safe layer made.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
#[cfg(not(feature = "v0-1-3"))]
use std::ffi::CStr;
#[cfg(not(feature = "v0-1-3"))]
use std::os::raw::c_char;
use std::os::raw::{c_int, c_uint, c_void};
use std::sync::{Arc, Mutex, MutexGuard};

use arducam_tof::DepthCamera;
use arducam_tof::sys::{self, ArducamApi};

pub const WIDTH: u16 = 8;
pub const HEIGHT: u16 = 6;

#[derive(Debug, Clone)]
pub struct FakeState {
    /// SDK entry points in call order.
    pub calls: Vec<&'static str>,
    /// Status returned by an entry point instead of `0`.
    pub failures: HashMap<&'static str, c_int>,
    pub fail_create: bool,
    pub connection: Option<c_uint>,
    pub index: Option<c_int>,
    pub config_path: Option<String>,
    pub streaming: Option<sys::ArducamFrameType>,
    pub controls: HashMap<c_uint, c_int>,
    pub timeouts: Vec<c_int>,
    /// Frames handed out before `request_frame` starts returning null. `None` never runs dry.
    pub frames_left: Option<usize>,
    pub outstanding: usize,
    pub released: usize,
    pub closed: bool,
    pub width: u16,
    pub height: u16,
    pub with_confidence: bool,
    pub next_timestamp: u64,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            failures: HashMap::new(),
            fail_create: false,
            connection: None,
            index: None,
            config_path: None,
            streaming: None,
            controls: HashMap::new(),
            timeouts: Vec::new(),
            frames_left: None,
            outstanding: 0,
            released: 0,
            closed: false,
            width: WIDTH,
            height: HEIGHT,
            with_confidence: true,
            next_timestamp: 1_000,
        }
    }
}

impl FakeState {
    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    fn enter(&mut self, call: &'static str) -> c_int {
        self.calls.push(call);
        self.failures.get(call).copied().unwrap_or(0)
    }
}

pub type Shared = Arc<Mutex<FakeState>>;

struct FakeCamera {
    state: Shared,
}

struct FakeFrame {
    width: u16,
    height: u16,
    timestamp: u64,
    depth: Vec<f32>,
    confidence: Vec<f32>,
    raw: Vec<i16>,
}

/// Depth of pixel `i` in fake frames, in meters.
pub fn depth_at(i: usize) -> f32 {
    0.5 + i as f32 * 0.01
}

/// Confidence of pixel `i` in fake frames.
pub fn confidence_at(i: usize) -> f32 {
    i as f32
}

thread_local! {
    static NEXT_STATE: RefCell<Option<Shared>> = const { RefCell::new(None) };
}

/// Creates a camera backed by the fake SDK, with `state` as its initial device state.
pub fn fake_camera_with(state: FakeState) -> (arducam_tof::Result<DepthCamera>, Shared) {
    let shared = Arc::new(Mutex::new(state));
    NEXT_STATE.with(|next| *next.borrow_mut() = Some(shared.clone()));
    // SAFETY: every entry of FAKE_API follows the vendor contracts.
    let camera = unsafe { DepthCamera::with_api(&FAKE_API) };
    (camera, shared)
}

pub fn fake_camera() -> (DepthCamera, Shared) {
    let (camera, shared) = fake_camera_with(FakeState::default());
    (camera.expect("fake camera"), shared)
}

pub fn lock(state: &Shared) -> MutexGuard<'_, FakeState> {
    state.lock().unwrap()
}

unsafe fn camera_state<'a>(camera: sys::ArducamDepthCamera) -> MutexGuard<'a, FakeState> {
    let camera = unsafe { &*(camera as *const FakeCamera) };
    camera.state.lock().unwrap()
}

unsafe fn frame<'a>(fb: sys::ArducamFrameBuffer) -> &'a mut FakeFrame {
    unsafe { &mut *(fb as *mut FakeFrame) }
}

unsafe extern "C" fn fake_create() -> sys::ArducamDepthCamera {
    let state = NEXT_STATE
        .with(|next| next.borrow_mut().take())
        .unwrap_or_default();
    let fail = {
        let mut guard = state.lock().unwrap();
        guard.calls.push("create");
        guard.fail_create
    };
    if fail {
        return std::ptr::null_mut();
    }
    Box::into_raw(Box::new(FakeCamera { state })) as sys::ArducamDepthCamera
}

unsafe extern "C" fn fake_open(camera: sys::ArducamDepthCamera, conn: c_uint, index: c_int) -> c_int {
    let mut state = unsafe { camera_state(camera) };
    let status = state.enter("open");
    if status == 0 {
        state.connection = Some(conn);
        state.index = Some(index);
    }
    status
}

#[cfg(not(feature = "v0-1-3"))]
unsafe extern "C" fn fake_open_with_file(
    camera: sys::ArducamDepthCamera,
    path: *const c_char,
    index: c_int,
) -> c_int {
    let mut state = unsafe { camera_state(camera) };
    let status = state.enter("open_with_file");
    if status == 0 {
        let path = unsafe { CStr::from_ptr(path) };
        state.config_path = Some(path.to_string_lossy().into_owned());
        state.index = Some(index);
    }
    status
}

unsafe extern "C" fn fake_close(camera: *mut sys::ArducamDepthCamera) -> c_int {
    let handle = unsafe { *camera };
    let fake = unsafe { Box::from_raw(handle as *mut FakeCamera) };
    unsafe { *camera = std::ptr::null_mut() };
    let mut state = fake.state.lock().unwrap();
    state.closed = true;
    state.enter("close")
}

unsafe extern "C" fn fake_start(camera: sys::ArducamDepthCamera, frame_type: sys::ArducamFrameType) -> c_int {
    let mut state = unsafe { camera_state(camera) };
    let status = state.enter("start");
    if status == 0 {
        state.streaming = Some(frame_type);
    }
    status
}

unsafe extern "C" fn fake_stop(camera: sys::ArducamDepthCamera) -> c_int {
    let mut state = unsafe { camera_state(camera) };
    let status = state.enter("stop");
    if status == 0 {
        state.streaming = None;
    }
    status
}

#[cfg(not(feature = "v0-1-3"))]
unsafe extern "C" fn fake_get_info(camera: sys::ArducamDepthCamera) -> sys::ArducamCameraInfo {
    let mut state = unsafe { camera_state(camera) };
    state.enter("get_info");
    sys::ArducamCameraInfo {
        index: state.index.unwrap_or(0) as c_uint,
        connect: state.connection.unwrap_or(sys::ArducamConnection_CSI),
        device_type: sys::ArducamDeviceType_ARDUCAM_DEVICE_HQVGA,
        type_: state.streaming.unwrap_or(sys::ArducamFrameType_DEPTH_FRAME),
        width: state.width as c_uint,
        height: state.height as c_uint,
        bit_width: 12,
        bpp: 2,
    }
}

unsafe extern "C" fn fake_get_format(
    fb: sys::ArducamFrameBuffer,
    frame_type: sys::ArducamFrameType,
) -> sys::ArducamFrameFormat {
    let frame = unsafe { frame(fb) };
    sys::ArducamFrameFormat {
        width: frame.width,
        height: frame.height,
        type_: frame_type,
        timestamp: frame.timestamp,
    }
}

unsafe extern "C" fn fake_set_ctrl(camera: sys::ArducamDepthCamera, id: c_uint, value: c_int) -> c_int {
    let mut state = unsafe { camera_state(camera) };
    let status = state.enter("set_ctrl");
    if status == 0 {
        state.controls.insert(id, value);
    }
    status
}

unsafe extern "C" fn fake_get_ctrl(camera: sys::ArducamDepthCamera, id: c_uint, value: *mut c_int) -> c_int {
    let mut state = unsafe { camera_state(camera) };
    let status = state.enter("get_ctrl");
    if status == 0 {
        unsafe { *value = state.controls.get(&id).copied().unwrap_or(0) };
    }
    status
}

unsafe extern "C" fn fake_request_frame(camera: sys::ArducamDepthCamera, timeout: c_int) -> sys::ArducamFrameBuffer {
    let mut state = unsafe { camera_state(camera) };
    state.enter("request_frame");
    state.timeouts.push(timeout);
    if state.streaming.is_none() {
        return std::ptr::null_mut();
    }
    match state.frames_left {
        Some(0) => return std::ptr::null_mut(),
        Some(ref mut left) => *left -= 1,
        None => {}
    }

    let pixels = state.width as usize * state.height as usize;
    let frame = FakeFrame {
        width: state.width,
        height: state.height,
        timestamp: state.next_timestamp,
        depth: (0..pixels).map(depth_at).collect(),
        confidence: if state.with_confidence {
            (0..pixels).map(confidence_at).collect()
        } else {
            Vec::new()
        },
        raw: (0..pixels).map(|i| i as i16).collect(),
    };
    state.next_timestamp += 33;
    state.outstanding += 1;
    Box::into_raw(Box::new(frame)) as sys::ArducamFrameBuffer
}

unsafe extern "C" fn fake_release_frame(camera: sys::ArducamDepthCamera, fb: sys::ArducamFrameBuffer) -> c_int {
    let mut state = unsafe { camera_state(camera) };
    drop(unsafe { Box::from_raw(fb as *mut FakeFrame) });
    state.outstanding -= 1;
    state.released += 1;
    state.enter("release_frame")
}

unsafe extern "C" fn fake_get_depth_data(fb: sys::ArducamFrameBuffer) -> *mut c_void {
    unsafe { frame(fb) }.depth.as_mut_ptr().cast()
}

unsafe extern "C" fn fake_get_confidence_data(fb: sys::ArducamFrameBuffer) -> *mut c_void {
    let frame = unsafe { frame(fb) };
    if frame.confidence.is_empty() {
        return std::ptr::null_mut();
    }
    frame.confidence.as_mut_ptr().cast()
}

unsafe extern "C" fn fake_get_raw_data(fb: sys::ArducamFrameBuffer) -> *mut c_void {
    unsafe { frame(fb) }.raw.as_mut_ptr().cast()
}

#[cfg(not(feature = "v0-1-3"))]
pub static FAKE_API: ArducamApi = ArducamApi {
    create_camera: fake_create,
    open: fake_open,
    open_with_file: fake_open_with_file,
    close: fake_close,
    start: fake_start,
    stop: fake_stop,
    get_info: fake_get_info,
    get_format: fake_get_format,
    set_ctrl: fake_set_ctrl,
    get_ctrl: fake_get_ctrl,
    request_frame: fake_request_frame,
    release_frame: fake_release_frame,
    get_depth_data: fake_get_depth_data,
    get_confidence_data: fake_get_confidence_data,
    get_raw_data: fake_get_raw_data,
};

#[cfg(feature = "v0-1-3")]
pub static FAKE_API: ArducamApi = ArducamApi {
    create_camera: fake_create,
    open: fake_open,
    close: fake_close,
    start: fake_start,
    stop: fake_stop,
    get_format: fake_get_format,
    set_ctrl: fake_set_ctrl,
    get_ctrl: fake_get_ctrl,
    request_frame: fake_request_frame,
    release_frame: fake_release_frame,
    get_depth_data: fake_get_depth_data,
    get_amplitude_data: fake_get_confidence_data,
    get_raw_data: fake_get_raw_data,
};
