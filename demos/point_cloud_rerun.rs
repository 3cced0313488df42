use std::error::Error;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use argh::FromArgs;
use arducam_tof::pointcloud::confidence_color;
use arducam_tof::preview::depth_to_gray;
use arducam_tof::{CameraConfig, Intrinsics, PointCloud, PointFilter, RangeMode};

use rerun as rr;

/// Shows the camera's depth image and point cloud in the rerun viewer
#[derive(Debug, FromArgs)]
struct Args {
    /// JSON camera configuration (defaults to CSI device 0, depth stream)
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// drop points farther than this, in meters
    #[argh(option)]
    max_depth: Option<f32>,

    /// colour points red below this confidence
    #[argh(option, default = "30.0")]
    confidence_low: f32,

    /// colour points green above this confidence
    #[argh(option, default = "100.0")]
    confidence_high: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let rec = rr::RecordingStreamBuilder::new("arducam_tof_point_cloud").spawn()?;

    let config = match &args.config {
        Some(path) => CameraConfig::from_json_file(path)?,
        None => CameraConfig::default(),
    };
    let cam = config.open_camera()?;
    let max_range = config.range.unwrap_or(RangeMode::Far).meters() as f32;

    let filter = PointFilter {
        min_depth: Some(0.0),
        max_depth: args.max_depth,
        confidence: None,
    };
    let colour_range: RangeInclusive<f32> = args.confidence_low..=args.confidence_high;

    let mut frame_nr: i64 = 0;
    loop {
        let Some(frame) = cam.request_frame(Some(Duration::from_millis(200)))? else {
            continue;
        };
        rec.set_time_sequence("frame", frame_nr);
        frame_nr += 1;

        let depth = frame.depth()?;
        let confidence = frame.confidence()?;

        let preview = depth_to_gray(&depth, max_range);
        let (w, h) = preview.dimensions();
        rec.log("depth", &rr::Image::from_l8(preview.into_raw(), [w, h]))?;

        let intrinsics = Intrinsics::tof_default(depth.width() as u32, depth.height() as u32);
        let mut cloud = PointCloud::from_depth(&depth, Some(&confidence), &intrinsics)?;
        drop(frame);
        cloud.retain(&filter);

        let positions = cloud.iter().map(|p| rr::Position3D::from([p.x, p.y, p.z]));
        let colors = cloud.iter().map(|p| {
            let [r, g, b] = confidence_color(p.confidence, &colour_range);
            rr::Color::from_rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
        });
        rec.log("pcl", &rr::Points3D::new(positions).with_colors(colors))?;
    }
}
