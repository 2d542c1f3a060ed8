mod progress;
mod summary;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use wiggle_core::pipeline::config::{ResampleFilter, WiggleConfig};
use wiggle_core::pipeline::process_file_reported;

use progress::SpinnerReporter;

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    Nearest,
    Bilinear,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterArg> for ResampleFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResampleFilter::Nearest,
            FilterArg::Bilinear => ResampleFilter::Triangle,
            FilterArg::CatmullRom => ResampleFilter::CatmullRom,
            FilterArg::Gaussian => ResampleFilter::Gaussian,
            FilterArg::Lanczos3 => ResampleFilter::Lanczos3,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "wiggle",
    about = "Turn side-by-side stereo shots into aligned wiggle GIFs"
)]
#[command(version)]
struct Cli {
    /// Input images; each produces <name>_wiggle.gif next to it
    #[arg(required_unless_present = "dump_config", num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Pipeline config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of vertical slices in each input
    #[arg(long)]
    slices: Option<usize>,

    /// Border in pixels cropped from every edge after alignment
    #[arg(long)]
    margin: Option<usize>,

    /// Downscale factor in (0, 1]
    #[arg(long)]
    scale: Option<f64>,

    /// Frame delay in hundredths of a second
    #[arg(long)]
    delay: Option<u16>,

    /// Resampling filter for downscaling
    #[arg(long, value_enum)]
    filter: Option<FilterArg>,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn resolve_config(cli: &Cli) -> Result<WiggleConfig> {
    let mut config = if let Some(ref path) = cli.config {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))?
    } else {
        WiggleConfig::default()
    };

    if let Some(slices) = cli.slices {
        config.slice_count = slices;
    }
    if let Some(margin) = cli.margin {
        config.crop_margin = margin;
    }
    if let Some(scale) = cli.scale {
        config.scale_factor = scale;
    }
    if let Some(delay) = cli.delay {
        config.frame_delay_cs = delay;
    }
    if let Some(filter) = cli.filter {
        config.filter = filter.into();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = resolve_config(&cli)?;

    if cli.dump_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.verbose {
        summary::print_config_summary(&config);
    }

    let mut failures = 0usize;
    for input in &cli.inputs {
        let reporter = SpinnerReporter::new(input);
        let result = process_file_reported(input, &config, &reporter);
        reporter.finish();

        match result {
            Ok(output) => summary::print_success(input, &output),
            Err(err) => {
                failures += 1;
                summary::print_failure(input, &err);
            }
        }
    }

    if failures > 0 {
        tracing::warn!(failures, total = cli.inputs.len(), "Some inputs failed");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
