//! satura CLI - adjust image color saturation.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use satura::{Config, ImageSource, Pipeline};

/// Adjust the color saturation of an image.
///
/// INPUT may be a local file path, an http(s) URL, or `-` to read image
/// bytes from stdin (e.g. piped from a clipboard tool).
#[derive(Parser, Debug)]
#[command(name = "satura")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image: file path, URL, or `-` for stdin.
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output image path. Extension selects the format; PNG is lossless.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Saturation percentage (0-200). 100 = unchanged, 0 = grayscale, 200 = maximum.
    #[arg(short, long, default_value = "100", value_name = "PERCENT")]
    saturation: f32,

    /// Export a before/after comparison split at this percent of the width.
    #[arg(short, long, value_name = "PERCENT")]
    compare: Option<f32>,

    /// Output JPEG quality (1-100).
    #[arg(short, long, default_value = "95", value_name = "INT")]
    quality: u8,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("satura={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let source = ImageSource::parse(&args.input);

    if let ImageSource::File(path) = &source {
        if !path.exists() {
            anyhow::bail!("Input file does not exist: {}", path.display());
        }
    }

    let config = Config {
        saturation: args.saturation,
        output_quality: args.quality,
        compare_split: args.compare,
    };

    let pipeline = Pipeline::new(config).context("Invalid configuration")?;

    pipeline
        .process(&source, &args.output)
        .context("Failed to process image")?;

    println!(
        "Successfully processed {} -> {}",
        source.origin(),
        args.output.display()
    );

    Ok(())
}
