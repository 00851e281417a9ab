//! drishti-detect
//!
//! Replays a recorded scan log through the object detector and writes one
//! JSON record per frame.
//!
//! # Usage
//!
//! ```bash
//! # Defaults (drishti.toml if present)
//! cargo run --bin drishti-detect -- --input session.jsonl
//!
//! # Custom config with overrides, results to a file
//! cargo run --bin drishti-detect -- --input session.jsonl --config drishti.toml \
//!     --threshold-mm 150 --min-points 4 --output objects.jsonl
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use drishti::{DetectionConfig, DetectionWriter, ObjectDetector, ScanLogReader, replay};

#[derive(Parser)]
#[command(name = "drishti-detect")]
#[command(about = "Detect objects in recorded LiDAR scans")]
struct Args {
    /// Scan log (JSON lines, one scan per line)
    #[arg(short, long)]
    input: PathBuf,

    /// Configuration file (defaults to drishti.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep every Nth raw reading
    #[arg(long)]
    stride: Option<usize>,

    /// Seed-to-point cluster join distance (mm)
    #[arg(long)]
    threshold_mm: Option<f32>,

    /// Minimum points per reported object
    #[arg(long)]
    min_points: Option<usize>,

    /// Maximum number of scans to process (0 = all)
    #[arg(long, default_value = "0")]
    max_scans: usize,

    /// Include sampled points and cluster memberships in the output
    #[arg(long)]
    points: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<DetectionConfig, drishti::ConfigLoadError> {
    let mut config = match &args.config {
        Some(path) => DetectionConfig::load(path)?,
        None => DetectionConfig::load_default()?,
    };

    if let Some(stride) = args.stride {
        config.sampling.stride = stride;
    }
    if let Some(threshold) = args.threshold_mm {
        config.clustering.threshold_mm = threshold;
    }
    if let Some(min_points) = args.min_points {
        config.clustering.min_points = min_points;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    log::info!(
        "Config: stride={} threshold={:.1}mm min_points={}",
        config.sampling.stride,
        config.clustering.threshold_mm,
        config.clustering.min_points
    );

    let detector = ObjectDetector::new(config);
    let mut reader = ScanLogReader::open(&args.input)?;
    log::info!("Reading scans from {}", args.input.display());

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut writer = DetectionWriter::new(sink).with_points(args.points);

    let summary = replay(&detector, &mut reader, &mut writer, args.max_scans)?;
    writer.finish()?;

    log::info!(
        "Done: {} scans read, {} frames processed, {} skipped, {} objects",
        summary.scans_read,
        summary.frames_written,
        summary.skipped,
        summary.objects
    );

    Ok(())
}
