//! pssg - command-line driver for the Plot · Salt · Smooth · Graph pipeline.
//!
//! Reads a CSV series, runs classify → salt → smooth, writes the four PNG
//! charts into an output directory and the processed data as CSV.

use clap::Parser;
use pssg::{
    PssgResult,
    config::Config,
    ingest::{load_csv, save_processed},
    pipeline::run_pipeline,
    render::{RasterRenderer, Renderer},
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pssg")]
#[command(about = "Classify, salt, smooth and plot a numeric series", long_about = None)]
struct Cli {
    /// Input CSV with a header row
    input_csv: PathBuf,

    /// Directory for the PNG charts (created if missing)
    output_dir: PathBuf,

    /// Path of the processed-data CSV
    output_data: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Salt intensity in [0, 1]
    #[arg(long)]
    intensity: Option<f64>,

    /// Seed of the salting RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Smoothing window radius
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<i64>,

    /// Number of smoothing passes
    #[arg(long)]
    passes: Option<usize>,
}

impl Cli {
    /// Configuration file (or defaults) with command-line overrides applied.
    fn resolve_config(&self) -> PssgResult<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let pipeline = &mut config.pipeline;
        if let Some(intensity) = self.intensity {
            pipeline.intensity = intensity;
        }
        if let Some(seed) = self.seed {
            pipeline.seed = seed;
        }
        if let Some(radius) = self.radius {
            pipeline.radius = radius;
        }
        if let Some(passes) = self.passes {
            pipeline.passes = passes;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> PssgResult<()> {
    let config = cli.resolve_config()?;

    let data = load_csv(&cli.input_csv)?;
    info!(path = %cli.input_csv.display(), points = data.series.len(), "loaded input series");

    let result = run_pipeline(data.series, &config.pipeline)?;

    let plots = RasterRenderer::new(config.render)?.render(&result)?;
    let written = plots.save_png(&cli.output_dir)?;
    for path in &written {
        info!(path = %path.display(), "saved chart");
    }

    save_processed(&cli.output_data, &result, Some(data.axis.as_slice()))?;
    info!(path = %cli.output_data.display(), "saved processed data");

    let stats = result.statistics();
    info!(
        label = %result.label(),
        points = result.len(),
        mean = stats.mean(),
        std_dev = stats.std_dev(),
        smoothing_ratio = result.smoothing_ratio().unwrap_or(1.0),
        "pipeline finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "pssg failed");
            ExitCode::FAILURE
        }
    }
}
