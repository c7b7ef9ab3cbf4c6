use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod geometry;
mod input;
mod output;
mod trig;

use config::Config;
use geometry::LogoLayout;
use input::Prompter;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "logo-coords")]
#[command(author, version, about = "Compute circle and rectangle coordinates for a rotated logo")]
pub struct Args {
    /// Rotation angle in degrees (prompted for when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub angle: Option<i64>,

    /// Short side of the rectangle (prompted for when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Long side of the rectangle (prompted for when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Output format: text or toml
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Print numbers with a fixed number of decimals (text format only)
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Also print the rh/rw projection lengths
    #[arg(long)]
    pub show_lengths: bool,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Write a default config file to the XDG config directory and exit
    #[arg(long)]
    pub init_config: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("logo_coords=warn")),
        )
        .init();

    let args = Args::parse();

    if args.init_config {
        let path = Config::init_default_config()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let inputs = Prompter::new(stdin.lock(), stdout.lock()).resolve(config.preset_inputs())?;

    let layout = LogoLayout::compute(inputs);
    debug!("projections: {:?}", layout.lengths);

    let report = output::render(&layout, &config.report_options())?;
    let mut out = stdout.lock();
    out.write_all(report.as_bytes())?;
    out.flush()?;

    Ok(())
}
