//! Loading `SimConfig` from TOML plus command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lift_core::SimConfig;

/// Command-line arguments.  Flags override values from `--config`.
#[derive(Parser, Debug, Default)]
#[command(name = "lift-console", version, about = "Elevator fleet simulation in the terminal")]
pub struct Args {
    /// TOML file with `SimConfig` keys.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub elevators: Option<u32>,

    #[arg(long)]
    pub floors: Option<u32>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many ticks instead of running forever.
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Pause between ticks in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Onboard passenger limit per car.
    #[arg(long)]
    pub capacity: Option<u32>,
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// The file (or defaults) with every flag given on the command line applied.
pub fn resolve(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None       => SimConfig::default(),
    };
    if let Some(n) = args.elevators {
        config.elevator_count = n;
    }
    if let Some(n) = args.floors {
        config.floor_count = n;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.ticks.is_some() {
        config.total_ticks = args.ticks;
    }
    if let Some(ms) = args.interval_ms {
        config.tick_interval_ms = ms;
    }
    if args.capacity.is_some() {
        config.capacity = args.capacity;
    }
    Ok(config)
}
