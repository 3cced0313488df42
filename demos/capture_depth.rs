use std::path::PathBuf;
use std::time::Duration;

use argh::FromArgs;
use arducam_tof::preview::{confidence_mask, save_depth_png};
use arducam_tof::{CameraConfig, RangeMode, Result};

/// Captures depth frames and saves them as PNG previews
#[derive(Debug, FromArgs)]
struct Args {
    /// JSON camera configuration (defaults to CSI device 0, depth stream)
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// number of frames to save
    #[argh(option, short = 'n', default = "10")]
    count: usize,

    /// output directory
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    out_dir: PathBuf,

    /// also save a confidence mask with this threshold
    #[argh(option)]
    confidence_threshold: Option<f32>,

    /// frame request timeout in milliseconds
    #[argh(option, default = "200")]
    timeout_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = match &args.config {
        Some(path) => CameraConfig::from_json_file(path)?,
        None => CameraConfig::default(),
    };
    let cam = config.open_camera()?;
    let max_range = config.range.unwrap_or(RangeMode::Far).meters() as f32;
    std::fs::create_dir_all(&args.out_dir)?;

    let mut saved = 0;
    while saved < args.count {
        let Some(frame) = cam.request_frame(Some(Duration::from_millis(args.timeout_ms)))? else {
            println!("No frame yet");
            continue;
        };

        let depth = frame.depth()?;
        let path = args.out_dir.join(format!("depth_{saved:04}.png"));
        save_depth_png(&depth, max_range, &path)?;

        if let Some(threshold) = args.confidence_threshold {
            let confidence = frame.confidence()?;
            let mask_path = args.out_dir.join(format!("confidence_{saved:04}.png"));
            confidence_mask(&confidence, threshold).save(&mask_path)?;
        }

        println!(
            "Saved {} ({}x{}, t={})",
            path.display(),
            depth.width(),
            depth.height(),
            frame.timestamp()?
        );
        saved += 1;
    }

    cam.close()
}
