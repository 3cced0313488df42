use std::net::TcpStream;
use std::path::PathBuf;
use std::time::Duration;

use argh::FromArgs;
use arducam_tof::{CameraConfig, Intrinsics, PointCloud, PointCloudSender, Result};

/// Streams point clouds from the camera to a `point_cloud_server`
#[derive(Debug, FromArgs)]
struct Args {
    /// server host name or address
    #[argh(positional)]
    host: String,

    /// server port
    #[argh(option, short = 'p', default = "8080")]
    port: u16,

    /// JSON camera configuration (defaults to CSI device 0, depth stream)
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// stop after this many frames
    #[argh(option, short = 'n')]
    frames: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = match &args.config {
        Some(path) => CameraConfig::from_json_file(path)?,
        None => CameraConfig::default(),
    };
    let cam = config.open_camera()?;

    let stream = TcpStream::connect((args.host.as_str(), args.port))?;
    stream.set_nodelay(true)?;
    let mut sender = PointCloudSender::new(stream);
    log::info!("streaming to {}:{}", args.host, args.port);

    let mut intrinsics = None;
    let mut sent = 0;
    while args.frames.is_none_or(|frames| sent < frames) {
        let Some(frame) = cam.request_frame(Some(Duration::from_millis(200)))? else {
            continue;
        };
        let depth = frame.depth()?;
        let confidence = frame.confidence()?;

        let k = *intrinsics
            .get_or_insert_with(|| Intrinsics::tof_default(depth.width() as u32, depth.height() as u32));
        let cloud = PointCloud::from_depth(&depth, Some(&confidence), &k)?;
        // release the SDK buffer before blocking on the network
        drop(frame);

        sender.send(&cloud)?;
        sent += 1;
    }

    cam.close()
}
