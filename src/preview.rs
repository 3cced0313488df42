//! 8-bit preview images of depth and confidence frames.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::Result;
use crate::frame::FrameData;

/// Maps depth to gray levels: `0` at or beyond `max_range`, `255` at the sensor.
/// Non-finite and negative depths are treated as out of range.
pub fn depth_to_gray(depth: &FrameData<'_, f32>, max_range: f32) -> GrayImage {
    GrayImage::from_fn(depth.width() as u32, depth.height() as u32, |x, y| {
        let d = depth.get(x as usize, y as usize).unwrap_or(f32::NAN);
        Luma([depth_level(d, max_range)])
    })
}

fn depth_level(depth: f32, max_range: f32) -> u8 {
    if !depth.is_finite() || depth < 0.0 || max_range <= 0.0 {
        return 0;
    }
    let ratio = (depth / max_range).min(1.0);
    ((1.0 - ratio) * 255.0).round() as u8
}

/// White where `confidence >= threshold`, black elsewhere.
pub fn confidence_mask(confidence: &FrameData<'_, f32>, threshold: f32) -> GrayImage {
    GrayImage::from_fn(confidence.width() as u32, confidence.height() as u32, |x, y| {
        let c = confidence.get(x as usize, y as usize).unwrap_or(f32::NAN);
        Luma([if c >= threshold { 255 } else { 0 }])
    })
}

/// Writes the [`depth_to_gray`] preview of `depth` as a PNG file.
pub fn save_depth_png(depth: &FrameData<'_, f32>, max_range: f32, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    depth_to_gray(depth, max_range).save_with_format(path, image::ImageFormat::Png)?;
    log::debug!("wrote depth preview to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_is_bright_far_is_dark() {
        let depth = [0.0f32, 2.0, 4.0, 8.0];
        let depth = FrameData::new(4, 1, &depth).unwrap();
        let img = depth_to_gray(&depth, 4.0);
        assert_eq!(img.dimensions(), (4, 1));
        assert_eq!(img.get_pixel(0, 0)[0], 255);
        assert_eq!(img.get_pixel(1, 0)[0], 128);
        assert_eq!(img.get_pixel(2, 0)[0], 0);
        assert_eq!(img.get_pixel(3, 0)[0], 0);
    }

    #[test]
    fn invalid_depth_is_black() {
        assert_eq!(depth_level(f32::NAN, 4.0), 0);
        assert_eq!(depth_level(-1.0, 4.0), 0);
        assert_eq!(depth_level(1.0, 0.0), 0);
    }

    #[test]
    fn mask_thresholds_confidence() {
        let conf = [5.0f32, 30.0, 29.9, 100.0];
        let conf = FrameData::new(2, 2, &conf).unwrap();
        let mask = confidence_mask(&conf, 30.0);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(1, 0)[0], 255);
        assert_eq!(mask.get_pixel(0, 1)[0], 0);
        assert_eq!(mask.get_pixel(1, 1)[0], 255);
    }

    #[test]
    fn png_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depth.png");
        let depth = [1.0f32; 6];
        let depth = FrameData::new(3, 2, &depth).unwrap();
        save_depth_png(&depth, 2.0, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(2, 1)[0], 128);
    }
}
