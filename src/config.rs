//! JSON camera configuration.
//!
//! ```json
//! {
//!   "connection": "csi",
//!   "index": 0,
//!   "frame_type": "depth",
//!   "range": "far",
//!   "controls": [{ "control": "exposure", "value": 800 }]
//! }
//! ```
//!
//! Every field is optional; missing fields take the [`CameraConfig::default`] values.

use std::path::Path;
#[cfg(not(feature = "v0-1-3"))]
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::camera::DepthCamera;
use crate::common::{Connection, Control, FrameType, RangeMode};
use crate::error::Result;

/// One `arducamCameraSetCtrl` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControlSetting {
    pub control: Control,
    pub value: i32,
}

/// How to open, tune and start a camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub connection: Connection,
    /// Device node index (`/dev/video<index>`).
    pub index: i32,
    /// Vendor configuration file; when set the camera is opened with
    /// `arducamCameraOpenWithFile` and `connection` is ignored.
    #[cfg(not(feature = "v0-1-3"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
    pub frame_type: FrameType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeMode>,
    /// Applied in order, after `range`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<ControlSetting>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            connection: Connection::Csi,
            index: 0,
            #[cfg(not(feature = "v0-1-3"))]
            config_file: None,
            frame_type: FrameType::Depth,
            range: None,
            controls: Vec::new(),
        }
    }
}

impl CameraConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded camera config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_connection(mut self, connection: Connection, index: i32) -> Self {
        self.connection = connection;
        self.index = index;
        self
    }

    #[cfg(not(feature = "v0-1-3"))]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn with_frame_type(mut self, frame_type: FrameType) -> Self {
        self.frame_type = frame_type;
        self
    }

    pub fn with_range(mut self, range: RangeMode) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_control(mut self, control: Control, value: i32) -> Self {
        self.controls.push(ControlSetting { control, value });
        self
    }

    /// Writes the range and the control list to an opened camera.
    pub fn apply(&self, camera: &DepthCamera) -> Result<()> {
        if let Some(range) = self.range {
            camera.set_range(range)?;
        }
        for setting in &self.controls {
            camera.set_control(setting.control, setting.value)?;
        }
        Ok(())
    }

    /// Opens `camera`, applies the settings and starts streaming `frame_type`.
    pub fn configure(&self, camera: &mut DepthCamera) -> Result<()> {
        self.open(camera)?;
        self.apply(camera)?;
        camera.start(self.frame_type)
    }

    /// Creates a camera through the linked SDK and [`configure`](Self::configure)s it.
    pub fn open_camera(&self) -> Result<DepthCamera> {
        let mut camera = DepthCamera::new()?;
        self.configure(&mut camera)?;
        Ok(camera)
    }

    #[cfg(not(feature = "v0-1-3"))]
    fn open(&self, camera: &mut DepthCamera) -> Result<()> {
        match &self.config_file {
            Some(path) => camera.open_with_file(path, self.index),
            None => camera.open(self.connection, self.index),
        }
    }

    #[cfg(feature = "v0-1-3")]
    fn open(&self, camera: &mut DepthCamera) -> Result<()> {
        camera.open(self.connection, self.index)
    }
}
