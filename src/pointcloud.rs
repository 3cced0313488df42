//! Projection of depth frames into 3D points.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ArducamError, Result};
use crate::frame::FrameData;

/// Horizontal field of view of the Arducam ToF lens, in degrees.
pub const TOF_HFOV_DEG: f32 = 64.3;
/// Vertical field of view of the Arducam ToF lens, in degrees.
pub const TOF_VFOV_DEG: f32 = 50.4;

/// Pinhole parameters used to back-project depth pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intrinsics {
    pub width: u32,
    pub height: u32,
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
}

impl Intrinsics {
    /// Intrinsics of an ideal lens with the given fields of view (degrees). The optical
    /// centre sits on the middle pixel.
    pub fn from_fov(width: u32, height: u32, hfov_deg: f32, vfov_deg: f32) -> Self {
        let fx = width as f32 / (2.0 * (0.5 * hfov_deg.to_radians()).tan());
        let fy = height as f32 / (2.0 * (0.5 * vfov_deg.to_radians()).tan());
        Self {
            width,
            height,
            fx,
            fy,
            cx: (width / 2) as f32,
            cy: (height / 2) as f32,
        }
    }

    pub fn tof_default(width: u32, height: u32) -> Self {
        Self::from_fov(width, height, TOF_HFOV_DEG, TOF_VFOV_DEG)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub confidence: f32,
}

/// Points projected from one frame, in row-major pixel order until filtered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct PointCloud {
    /// Width of the source frame.
    pub width: u32,
    /// Height of the source frame.
    pub height: u32,
    pub points: Vec<Point>,
}

impl PointCloud {
    /// Back-projects every depth pixel.
    ///
    /// `x` grows to the left and `y` upwards of the optical centre, `z` is the depth
    /// value as reported by the SDK. Points get a confidence of `0.0` when no confidence
    /// frame is given.
    pub fn from_depth(
        depth: &FrameData<'_, f32>,
        confidence: Option<&FrameData<'_, f32>>,
        intrinsics: &Intrinsics,
    ) -> Result<Self> {
        if let Some(confidence) = confidence {
            if confidence.dimensions() != depth.dimensions() {
                return Err(ArducamError::DimensionMismatch {
                    expected: depth.dimensions(),
                    actual: confidence.dimensions(),
                });
            }
        }

        let width = depth.width();
        let confidences = confidence.map(|c| c.as_slice());
        let points = depth
            .iter()
            .enumerate()
            .map(|(i, &z)| {
                let (col, row) = (i % width, i / width);
                Point {
                    x: ((intrinsics.cx - col as f32) / intrinsics.fx) * z,
                    y: ((intrinsics.cy - row as f32) / intrinsics.fy) * z,
                    z,
                    confidence: confidences.map_or(0.0, |c| c[i]),
                }
            })
            .collect();

        Ok(Self {
            width: width as u32,
            height: depth.height() as u32,
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drops the points rejected by `filter`.
    pub fn retain(&mut self, filter: &PointFilter) {
        self.points.retain(|p| filter.accepts(p));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

/// Depth and confidence bounds applied to a point cloud. Unset bounds accept everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointFilter {
    pub min_depth: Option<f32>,
    pub max_depth: Option<f32>,
    /// Accepted confidence values; the bounds may be given in either order.
    pub confidence: Option<RangeInclusive<f32>>,
}

impl PointFilter {
    pub fn accepts(&self, point: &Point) -> bool {
        if self.max_depth.is_some_and(|max| point.z > max) {
            return false;
        }
        if self.min_depth.is_some_and(|min| point.z < min) {
            return false;
        }
        match &self.confidence {
            Some(range) => {
                let (a, b) = (*range.start(), *range.end());
                (a.min(b)..=a.max(b)).contains(&point.confidence)
            }
            None => true,
        }
    }
}

/// RGB colour of a point, in `0.0..=1.0`, for a confidence threshold range.
///
/// Confidences below `range.start()` are red, above `range.end()` green, and the range
/// itself blends linearly from red to green. With `start > end` the comparisons are
/// mirrored, so higher values are treated as worse. Non-finite confidences are red.
pub fn confidence_color(confidence: f32, range: &RangeInclusive<f32>) -> [f32; 3] {
    let (low, high) = (*range.start(), *range.end());
    let (bad, good) = if !confidence.is_finite() {
        (true, false)
    } else if low < high {
        (confidence < low, confidence > high)
    } else {
        (confidence > low, confidence < high)
    };

    if bad {
        [1.0, 0.0, 0.0]
    } else if good {
        [0.0, 1.0, 0.0]
    } else if low == high {
        [0.0, 1.0, 0.0]
    } else {
        let t = (confidence - low) / (high - low);
        [1.0 - t, t, 0.0]
    }
}
