//! Receives point clouds from `point_cloud_client` and reports them.
//!
//! Filters are changed at runtime from stdin:
//!
//! ```text
//! set max depth <METERS>        clear max depth
//! set min depth <METERS>        clear min depth
//! set confidence range <LOW> <HIGH>
//! clear confidence range
//! ```

use std::io::{BufRead, Write};
use std::net::TcpListener;
use std::ops::RangeInclusive;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use argh::FromArgs;
use arducam_tof::pointcloud::confidence_color;
use arducam_tof::{PointCloud, PointCloudReceiver, PointFilter, Result};

/// Receives point clouds over TCP and prints per-frame statistics
#[derive(Debug, FromArgs)]
struct Args {
    /// address to listen on
    #[argh(option, short = 'l', default = "String::from(\"0.0.0.0:8080\")")]
    listen: String,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    SetMaxDepth(Option<f32>),
    SetMinDepth(Option<f32>),
    SetConfidenceRange(Option<RangeInclusive<f32>>),
}

fn parse_command(input: &str) -> std::result::Result<Option<Command>, String> {
    let input = input.trim();
    let parse = |value: &str, what: &str| {
        value
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("Bad {what}: {e}"))
    };

    let command = match input {
        "" => return Ok(None),
        "clear max depth" => Command::SetMaxDepth(None),
        "clear min depth" => Command::SetMinDepth(None),
        "clear confidence range" => Command::SetConfidenceRange(None),
        _ => {
            if let Some(value) = input.strip_prefix("set max depth ") {
                Command::SetMaxDepth(Some(parse(value, "max depth")?))
            } else if let Some(value) = input.strip_prefix("set min depth ") {
                Command::SetMinDepth(Some(parse(value, "min depth")?))
            } else if let Some(range) = input.strip_prefix("set confidence range ") {
                let (low, high) = range
                    .trim()
                    .split_once(' ')
                    .ok_or("set confidence range <LOW> <HIGH>")?;
                let low = parse(low, "lower bound")?;
                let high = parse(high, "higher bound")?;
                Command::SetConfidenceRange(Some(low..=high))
            } else {
                return Err("Unrecognised input".to_string());
            }
        }
    };
    Ok(Some(command))
}

fn control_thread(sender: Sender<Command>) {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut input = String::new();
    loop {
        input.clear();
        print!("\n> ");
        let _ = stdout.flush();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        match parse_command(&input) {
            Ok(Some(command)) => {
                if sender.send(command).is_err() {
                    return;
                }
            }
            Ok(None) => {}
            Err(message) => println!("{message}"),
        }
    }
}

fn network_thread(listener: TcpListener, sender: Sender<PointCloud>) -> Result<()> {
    let (stream, peer) = listener.accept()?;
    log::info!("client connected from {peer}");
    for cloud in PointCloudReceiver::new(stream) {
        if sender.send(cloud?).is_err() {
            break;
        }
    }
    Ok(())
}

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

struct Report {
    points: usize,
    mean_depth: f32,
    low_confidence: usize,
    high_confidence: usize,
}

fn report(cloud: &PointCloud, confidence_range: Option<&RangeInclusive<f32>>) -> Report {
    let mut report = Report {
        points: cloud.len(),
        mean_depth: 0.0,
        low_confidence: 0,
        high_confidence: 0,
    };
    if cloud.is_empty() {
        return report;
    }
    report.mean_depth = cloud.iter().map(|p| p.z).sum::<f32>() / cloud.len() as f32;
    if let Some(range) = confidence_range {
        for point in cloud.iter() {
            let colour = confidence_color(point.confidence, range);
            if colour == RED {
                report.low_confidence += 1;
            } else if colour == GREEN {
                report.high_confidence += 1;
            }
        }
    }
    report
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    let listener = TcpListener::bind(&args.listen)?;
    println!("Listening on {}", listener.local_addr()?);

    let (cloud_sender, clouds) = mpsc::channel();
    let network = std::thread::spawn(move || network_thread(listener, cloud_sender));
    let (command_sender, commands) = mpsc::channel();
    std::thread::spawn(move || control_thread(command_sender));

    run(&clouds, &commands);

    match network.join() {
        Ok(result) => result,
        Err(_) => {
            log::error!("network thread panicked");
            Ok(())
        }
    }
}

fn run(clouds: &Receiver<PointCloud>, commands: &Receiver<Command>) {
    let mut filter = PointFilter::default();
    let mut colour_range: Option<RangeInclusive<f32>> = None;
    loop {
        while let Ok(command) = commands.try_recv() {
            match command {
                Command::SetMaxDepth(max) => filter.max_depth = max,
                Command::SetMinDepth(min) => filter.min_depth = min,
                Command::SetConfidenceRange(range) => colour_range = range,
            }
        }

        match clouds.recv_timeout(Duration::from_millis(100)) {
            Ok(mut cloud) => {
                cloud.retain(&filter);
                let r = report(&cloud, colour_range.as_ref());
                println!(
                    "{} points, mean depth {:.3}, {} below / {} above confidence range",
                    r.points, r.mean_depth, r.low_confidence, r.high_confidence
                );
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}
