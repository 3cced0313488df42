//! Error handling for the Arducam ToF bindings

use std::num::NonZeroI32;
use std::os::raw::c_int;

use crate::common::FrameType;

/// Result type for camera operations
pub type Result<T> = std::result::Result<T, ArducamError>;

/// Errors that can occur when working with an Arducam ToF camera
#[derive(Debug, thiserror::Error)]
pub enum ArducamError {
    /// The vendor library was not linked into this build.
    #[error("Arducam SDK is not linked into this build (set ARDUCAM_TOF_LIB_DIR and enable the `native` feature)")]
    SdkUnavailable,

    /// `createArducamDepthCamera` returned a null handle.
    #[error("Failed to create camera handle")]
    CreateFailed,

    /// A vendor call returned a non-zero status.
    #[error("{op} failed with status {code}")]
    Status {
        op: &'static str,
        code: NonZeroI32,
    },

    #[error("Camera is not open")]
    NotOpen,

    #[error("Camera is already open")]
    AlreadyOpen,

    #[error("Camera is not streaming")]
    NotStreaming,

    #[error("Camera is already streaming {0:?} frames")]
    AlreadyStreaming(FrameType),

    /// The frame buffer returned a null pointer for the requested data.
    #[error("Frame has no {0:?} data")]
    MissingData(FrameType),

    #[error("{0:?} data is not aligned for its sample type")]
    MisalignedData(FrameType),

    /// A value returned by the SDK is outside the known vocabulary.
    #[error("Invalid {kind} value: {value}")]
    InvalidEnum { kind: &'static str, value: i64 },

    /// Two frame views that must share a geometry do not.
    #[error("Frame size mismatch: {expected:?} vs {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Null character in string: {0}")]
    Nul(#[from] std::ffi::NulError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to encode point cloud: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Failed to decode point cloud: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl ArducamError {
    /// Maps a vendor status code to `Ok(())` or [`ArducamError::Status`].
    pub fn check(op: &'static str, status: c_int) -> Result<()> {
        match NonZeroI32::new(status) {
            None => Ok(()),
            Some(code) => Err(ArducamError::Status { op, code }),
        }
    }

    /// The vendor status code, if this error carries one.
    pub fn status_code(&self) -> Option<i32> {
        match self {
            ArducamError::Status { code, .. } => Some(code.get()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_status_is_success() {
        assert!(ArducamError::check("arducamCameraStart", 0).is_ok());
    }

    #[test]
    fn non_zero_status_keeps_code_and_operation() {
        let err = ArducamError::check("arducamCameraOpen", -3).unwrap_err();
        assert_eq!(err.status_code(), Some(-3));
        assert_eq!(err.to_string(), "arducamCameraOpen failed with status -3");
    }

    #[test]
    fn state_errors_have_no_status() {
        assert_eq!(ArducamError::NotOpen.status_code(), None);
    }
}
