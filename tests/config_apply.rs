mod common;

use arducam_tof::{ArducamError, CameraConfig, CameraState, Connection, Control, FrameType, RangeMode};
use common::{FakeState, fake_camera, fake_camera_with, lock};

#[test]
fn configure_opens_applies_and_starts() {
    let config = CameraConfig::from_json_str(
        r#"{
            "connection": "usb",
            "index": 1,
            "frame_type": "raw",
            "range": "far"
        }"#,
    )
    .unwrap();

    let (mut cam, state) = fake_camera();
    config.configure(&mut cam).unwrap();
    assert_eq!(cam.state(), CameraState::Streaming(FrameType::Raw));

    let state = lock(&state);
    assert_eq!(state.calls, vec!["create", "open", "set_ctrl", "start"]);
    assert_eq!(state.connection, Some(Connection::Usb.as_raw()));
    assert_eq!(state.index, Some(1));
    assert_eq!(state.controls.get(&Control::Range.as_raw()), Some(&RangeMode::Far.meters()));
}

#[test]
fn controls_are_applied_after_range_in_order() {
    let config = CameraConfig::default()
        .with_range(RangeMode::Near)
        .with_control(Control::Range, 4);
    let (mut cam, state) = fake_camera();
    config.configure(&mut cam).unwrap();
    assert_eq!(lock(&state).controls.get(&Control::Range.as_raw()), Some(&4));
    assert_eq!(lock(&state).count("set_ctrl"), 2);
}

#[test]
fn failing_control_aborts_before_start() {
    let mut fake = FakeState::default();
    fake.failures.insert("set_ctrl", -1);
    let (cam, state) = fake_camera_with(fake);
    let mut cam = cam.unwrap();

    let config = CameraConfig::default().with_range(RangeMode::Far);
    let err = config.configure(&mut cam).unwrap_err();
    assert!(matches!(err, ArducamError::Status { op: "arducamCameraSetCtrl", .. }));
    assert_eq!(cam.state(), CameraState::Opened);
    assert_eq!(lock(&state).count("start"), 0);
}

#[test]
fn apply_requires_an_open_camera() {
    let (cam, _state) = fake_camera();
    let config = CameraConfig::default().with_range(RangeMode::Far);
    assert!(matches!(config.apply(&cam), Err(ArducamError::NotOpen)));
    // nothing to write is not an error
    assert!(CameraConfig::default().apply(&cam).is_ok());
}

#[cfg(not(feature = "v0-1-3"))]
#[test]
fn config_file_takes_precedence_over_connection() {
    let config = CameraConfig::default()
        .with_connection(Connection::Usb, 2)
        .with_config_file("/opt/arducam/tof.cfg");
    let (mut cam, state) = fake_camera();
    config.configure(&mut cam).unwrap();

    let state = lock(&state);
    assert_eq!(state.count("open"), 0);
    assert_eq!(state.count("open_with_file"), 1);
    assert_eq!(state.config_path.as_deref(), Some("/opt/arducam/tof.cfg"));
    assert_eq!(state.index, Some(2));
}
