//! `wiener-deblur` CLI - Remove defocus blur from grayscale images.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wiener_deblur::{Config, Pipeline, WienerParams};

/// Remove out-of-focus blur from a grayscale image with a Wiener filter.
#[derive(Parser, Debug)]
#[command(name = "wiener-deblur")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path. Colour images are converted to grayscale.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output image path.
    #[arg(value_name = "OUTPUT", default_value = "filtered.jpg")]
    output: PathBuf,

    /// Blur disk radius in pixels.
    #[arg(short, long, default_value = "64", value_name = "INT", allow_negative_numbers = true)]
    radius: i32,

    /// Signal-to-noise ratio. Lower values suppress more noise but restore less detail.
    #[arg(long, default_value = "1200", value_name = "FLOAT")]
    snr: f32,

    /// Resize factor for the written image (e.g. 0.3 for a small preview).
    #[arg(long, default_value = "1.0", value_name = "FLOAT")]
    scale: f32,

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
                .unwrap_or_else(|_| format!("wiener_deblur={log_level}").into()),
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
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let config = Config {
        params: WienerParams::new(args.radius, args.snr),
        output_scale: args.scale,
        output_quality: args.quality,
    };

    let pipeline = Pipeline::new(config).context("Invalid deblur settings")?;

    pipeline
        .process(&args.input, &args.output)
        .context("Failed to deblur image")?;

    println!(
        "Successfully processed {} -> {}",
        args.input.display(),
        args.output.display()
    );

    Ok(())
}
