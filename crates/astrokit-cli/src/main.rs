use std::path::PathBuf;

use anyhow::Result;
use clap::ArgGroup;
use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use astrokit_cli::options::parse_redshift;
use astrokit_cli::{ConfigFile, CosmiccalOptions, CosmologyOptions, Input, OutputOptions, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "cosmiccal",
    about = "cosmiccal: cosmological calculations at a given redshift",
    version,
    group = ArgGroup::new("input").required(true).args(["redshift", "velocity"])
)]
pub struct Cli {
    /// Redshift of interest
    #[arg(short = 'z', long, value_name = "Z", value_parser = parse_redshift)]
    redshift: Option<f64>,

    /// Recession velocity (km/s), converted to a redshift
    #[arg(short = 'y', long, value_name = "KM/S", allow_negative_numbers = true)]
    velocity: Option<f64>,

    #[command(flatten)]
    cosmology: CosmologyOptions,

    #[command(flatten)]
    output: OutputOptions,

    /// TOML file with default parameters
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,
}

pub fn run(args: Cli) -> Result<()> {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };

    // The argument group guarantees exactly one of the two.
    let input = match (args.redshift, args.velocity) {
        (Some(z), _) => Input::Redshift(z),
        (None, Some(v)) => Input::Velocity(v),
        (None, None) => anyhow::bail!("one of '--redshift' or '--velocity' is required"),
    };

    let opts = CosmiccalOptions::resolve(input, &args.cosmology, &args.output, &file);
    tracing::debug!(?opts, "resolved options");
    run_main(&opts)
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
