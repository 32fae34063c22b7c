//! lift-console: the elevator fleet simulation drawn in the terminal.
//!
//! Builds the standard randomized building from `SimConfig` (defaults, an
//! optional TOML file, then command-line flags) and redraws the shaft after
//! every tick, pausing `tick_interval_ms` in between.  Runs until Ctrl-C
//! unless `--ticks` is given.
//!
//! Set `RUST_LOG=info` to also get every event line on stderr.

mod config;
mod render;


use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use lift_core::{FloorRange, Tick};
use lift_sim::{SimBuilder, SimObserver, SimStats, Snapshot};

use config::{Args, resolve};
use render::Frame;

/// ANSI: cursor home, clear screen.
const CLEAR: &str = "\x1b[H\x1b[2J";

// ── Observer ──────────────────────────────────────────────────────────────────

struct ConsoleRenderer {
    range:    FloorRange,
    interval: Duration,
    stats:    SimStats,
}

impl SimObserver for ConsoleRenderer {
    fn on_tick_end(&mut self, _tick: Tick, snapshot: &Snapshot<'_>) {
        self.stats = *snapshot.stats;
        let mut stdout = io::stdout().lock();
        if let Err(e) = write!(stdout, "{CLEAR}{}", Frame::new(*snapshot, self.range))
            .and_then(|()| stdout.flush())
        {
            log::warn!("failed to draw tick: {e}");
        }
        drop(stdout);
        thread::sleep(self.interval);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        let s = &self.stats;
        println!();
        println!("Simulation ended at {final_tick}");
        println!("  calls placed         : {} ({} unassigned)", s.calls_placed, s.calls_unassigned);
        println!("  passengers called    : {}", s.passengers_called);
        println!("  passengers boarded   : {}", s.passengers_boarded);
        println!("  passengers delivered : {}", s.passengers_delivered);
        println!("  floors travelled     : {}", s.floors_travelled);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = resolve(&args)?;
    log::info!(
        "starting: {} elevators, {} floors, seed {}",
        config.elevator_count,
        config.floor_count,
        config.seed,
    );

    let mut sim = SimBuilder::randomized(config).build()?;
    let mut renderer = ConsoleRenderer {
        range:    sim.registry.range(),
        interval: sim.clock.interval(),
        stats:    SimStats::default(),
    };

    println!("Elevator simulation started...");
    sim.run(&mut renderer)?;
    Ok(())
}
