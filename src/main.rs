use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use equirect_resample::ResampleStrategy;
use panorama::models::{DimensionSpec, PanoramaConfig};
use panorama::services::{DownsampleJob, DownsamplePipeline};

#[derive(Parser)]
#[command(name = "panorama")]
#[command(about = "Downsample an equirectangular panorama stored as binary PPM (P6)")]
struct Cli {
    /// Output size, e.g. 1024x512 (must not exceed the input)
    size: DimensionSpec,

    /// Input P6 image, 8 bits per channel
    input: PathBuf,

    /// Resampling strategy: nearest, box or geodesic
    #[arg(short, long)]
    strategy: Option<ResampleStrategy>,

    /// Output file path [default: output.ppm]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Cap on the geodesic kernel's stretch near the poles [default: 8]
    #[arg(long)]
    max_stretch: Option<f32>,

    /// YAML config file (falls back to $PANORAMA_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version also arrive here
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "panorama=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("panorama: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = PanoramaConfig::load(cli.config.as_deref());
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(max_stretch) = cli.max_stretch {
        config.max_stretch = max_stretch;
    }

    let job = DownsampleJob {
        input: cli.input,
        output: config.output.clone(),
        size: cli.size,
    };

    tracing::debug!(
        strategy = %config.strategy,
        max_stretch = config.max_stretch,
        "Starting"
    );

    DownsamplePipeline::from_config(&config)
        .run(&job)
        .with_context(|| format!("failed to downsample to {}", job.size))?;

    Ok(())
}
