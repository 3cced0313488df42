pub mod camera;
pub mod common;
pub mod config;
pub mod error;
pub mod frame;
#[cfg(not(feature = "v0-1-3"))]
pub mod info;
#[cfg(not(feature = "v0-1-3"))]
pub mod modes;
pub mod pointcloud;
pub mod preview;
pub mod stream;

pub use arducam_tof_sys as sys;

// Re-export main types for convenience
pub use crate::camera::{CameraState, DepthCamera};
pub use crate::common::{Connection, Control, FrameType, ParseEnumError, RangeMode};
pub use crate::config::{CameraConfig, ControlSetting};
pub use crate::error::{ArducamError, Result};
pub use crate::frame::{FrameBuffer, FrameData, FrameFormat};
#[cfg(not(feature = "v0-1-3"))]
pub use crate::info::CameraInfo;
#[cfg(not(feature = "v0-1-3"))]
pub use crate::modes::{DeviceType, TofFrameWorkMode, TofWorkMode};
pub use crate::pointcloud::{Intrinsics, Point, PointCloud, PointFilter};
pub use crate::stream::{PointCloudReceiver, PointCloudSender};
