use std::fmt;
use std::str::FromStr;

use arducam_tof_sys as sys;

use crate::error::ArducamError;

/// Declares a Rust enum mirroring a C enum of the SDK header.
///
/// Generates `as_raw`, `from_raw`, `name`, `TryFrom<raw>`, `Display` and `FromStr`.
/// Serde uses the same snake_case names as `name`.
macro_rules! c_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $type_name:ident: $c_type:ty as $kind:literal {
            $(
                $variant:ident = $name:literal => $c_value:path
            ),+
            $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $type_name {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl $type_name {
            pub fn as_raw(self) -> $c_type {
                match self {
                    $(
                        $type_name::$variant => $c_value,
                    )+
                }
            }

            pub fn from_raw(value: $c_type) -> Option<Self> {
                match value {
                    $(
                        x if x == $c_value => Some($type_name::$variant),
                    )+
                    _ => None,
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(
                        $type_name::$variant => $name,
                    )+
                }
            }
        }

        impl TryFrom<$c_type> for $type_name {
            type Error = $crate::error::ArducamError;

            fn try_from(value: $c_type) -> Result<Self, Self::Error> {
                $type_name::from_raw(value).ok_or($crate::error::ArducamError::InvalidEnum {
                    kind: $kind,
                    value: value as i64,
                })
            }
        }

        impl std::fmt::Display for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $type_name {
            type Err = $crate::common::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(
                        $name => Ok($type_name::$variant),
                    )+
                    other => Err($crate::common::ParseEnumError {
                        kind: $kind,
                        input: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[cfg(not(feature = "v0-1-3"))]
pub(crate) use c_enum;

/// Returned when parsing an enum from its name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {input:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub input: String,
}

#[cfg(not(feature = "v0-1-3"))]
type RawConnection = sys::ArducamConnection;
#[cfg(feature = "v0-1-3")]
type RawConnection = sys::ArducamCameraConn;

#[cfg(not(feature = "v0-1-3"))]
type RawControl = sys::ArducamControl;
#[cfg(feature = "v0-1-3")]
type RawControl = sys::ArducamCameraCtrl;

#[cfg(not(feature = "v0-1-3"))]
c_enum! {
    /// Physical link between the host and the camera module.
    pub enum Connection: RawConnection as "connection" {
        Csi = "csi" => sys::ArducamConnection_CSI,
        Usb = "usb" => sys::ArducamConnection_USB,
    }
}

#[cfg(feature = "v0-1-3")]
c_enum! {
    /// Physical link between the host and the camera module.
    pub enum Connection: RawConnection as "connection" {
        Csi = "csi" => sys::ArducamCameraConn_CSI,
        Usb = "usb" => sys::ArducamCameraConn_USB,
    }
}

#[cfg(not(feature = "v0-1-3"))]
c_enum! {
    /// Which derived image a streaming session produces.
    pub enum FrameType: sys::ArducamFrameType as "frame type" {
        Raw = "raw" => sys::ArducamFrameType_RAW_FRAME,
        Confidence = "confidence" => sys::ArducamFrameType_CONFIDENCE_FRAME,
        Depth = "depth" => sys::ArducamFrameType_DEPTH_FRAME,
        Cache = "cache" => sys::ArducamFrameType_CACHE_FRAME,
    }
}

// 0.1.3 calls the confidence frame "amplitude" and has no cache frame.
#[cfg(feature = "v0-1-3")]
c_enum! {
    /// Which derived image a streaming session produces.
    pub enum FrameType: sys::ArducamFrameType as "frame type" {
        Raw = "raw" => sys::ArducamFrameType_RAW_FRAME,
        Confidence = "confidence" => sys::ArducamFrameType_AMPLITUDE_FRAME,
        Depth = "depth" => sys::ArducamFrameType_DEPTH_FRAME,
    }
}

#[cfg(not(feature = "v0-1-3"))]
c_enum! {
    /// Runtime-tunable device parameters.
    pub enum Control: RawControl as "control" {
        Range = "range" => sys::ArducamControl_ARDUCAM_CONTROL_RANGE,
        FormatWidth = "format_width" => sys::ArducamControl_ARDUCAM_CONTROL_FMT_WIDTH,
        FormatHeight = "format_height" => sys::ArducamControl_ARDUCAM_CONTROL_FMT_HEIGHT,
        Mode = "mode" => sys::ArducamControl_ARDUCAM_CONTROL_MODE,
        FrameMode = "frame_mode" => sys::ArducamControl_ARDUCAM_CONTROL_FRAME_MODE,
        Exposure = "exposure" => sys::ArducamControl_ARDUCAM_CONTROL_EXPOSURE,
        FrameRate = "frame_rate" => sys::ArducamControl_ARDUCAM_CONTROL_FRAME_RATE,
        SkipFrame = "skip_frame" => sys::ArducamControl_ARDUCAM_CONTROL_SKIP_FRAME,
        SkipFrameLoop = "skip_frame_loop" => sys::ArducamControl_ARDUCAM_CONTROL_SKIP_FRAME_LOOP,
    }
}

#[cfg(feature = "v0-1-3")]
c_enum! {
    /// Runtime-tunable device parameters.
    pub enum Control: RawControl as "control" {
        Range = "range" => sys::ArducamCameraCtrl_ArducamCameraRange,
    }
}

impl Default for Connection {
    fn default() -> Self {
        Connection::Csi
    }
}

impl Default for FrameType {
    fn default() -> Self {
        FrameType::Depth
    }
}

impl FrameType {
    /// Size in bytes of one pixel of this frame type as handed out by the SDK.
    pub fn pixel_size(self) -> usize {
        match self {
            FrameType::Raw => std::mem::size_of::<i16>(),
            FrameType::Confidence | FrameType::Depth => std::mem::size_of::<f32>(),
            #[cfg(not(feature = "v0-1-3"))]
            FrameType::Cache => std::mem::size_of::<f32>(),
        }
    }
}

/// Maximum measurable distance selected through [`Control::Range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeMode {
    /// 2 m range, finer resolution.
    Near,
    /// 4 m range.
    Far,
}

impl RangeMode {
    /// Value written to the range control, in meters.
    pub fn meters(self) -> i32 {
        match self {
            RangeMode::Near => 2,
            RangeMode::Far => 4,
        }
    }

    pub fn from_meters(meters: i32) -> Option<Self> {
        match meters {
            2 => Some(RangeMode::Near),
            4 => Some(RangeMode::Far),
            _ => None,
        }
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.meters())
    }
}

impl FromStr for RangeMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "near" | "2" | "2m" => Ok(RangeMode::Near),
            "far" | "4" | "4m" => Ok(RangeMode::Far),
            other => Err(ParseEnumError {
                kind: "range mode",
                input: other.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for RangeMode {
    type Error = ArducamError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        RangeMode::from_meters(value).ok_or(ArducamError::InvalidEnum {
            kind: "range mode",
            value: value as i64,
        })
    }
}
