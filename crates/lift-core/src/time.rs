//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick moves every
//! car by at most one floor and evaluates one random call opportunity.  The
//! only link to wall-clock time is the pacing delay held in `SimClock`, which
//! the presentation layer uses to sleep between ticks; the engine itself
//! never waits.

use std::fmt;

use crate::{FloorRange, LiftError, LiftResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The current tick plus the pacing interval between ticks.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Real milliseconds the presentation layer waits between ticks.
    pub tick_interval_ms: u64,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self { tick_interval_ms, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Paced milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_interval_ms
    }

    /// The pause between two ticks as a `Duration`.
    #[inline]
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed_ms() / 1_000;
        write!(f, "{} ({:02}:{:02})", self.current_tick, secs / 60, secs % 60)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Defaults reproduce the reference building: four cars, ten floors, a one
/// in four chance of a new call per tick carrying one to five passengers, and
/// the five most recent log lines kept for display.
///
/// Typically loaded from a TOML file by the application crate (with the
/// `serde` feature) and passed to the simulation builder.  Missing keys fall
/// back to the defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of cars in the fleet.  Ids are `1..=elevator_count`.
    pub elevator_count: u32,

    /// Floors `1..=floor_count`.  Must be at least 2.
    pub floor_count: u32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Chance, per tick, that a new floor call is generated.
    pub call_probability: f64,

    /// Upper bound (inclusive) of the passenger batch size of one call.
    pub max_batch: u32,

    /// Maximum onboard passengers per car.  `None` = unlimited.
    pub capacity: Option<u32>,

    /// How many recent log lines the snapshot carries.
    pub log_capacity: usize,

    /// Stop after this many ticks.  `None` runs until externally terminated.
    pub total_ticks: Option<u64>,

    /// Pacing delay between ticks, for the presentation layer.
    pub tick_interval_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            elevator_count:   4,
            floor_count:      10,
            seed:             42,
            call_probability: 0.25,
            max_batch:        5,
            capacity:         None,
            log_capacity:     5,
            total_ticks:      None,
            tick_interval_ms: 5_000,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive), if bounded.
    #[inline]
    pub fn end_tick(&self) -> Option<Tick> {
        self.total_ticks.map(Tick)
    }

    /// The building's floor range.
    pub fn floor_range(&self) -> LiftResult<FloorRange> {
        FloorRange::new(self.floor_count)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_interval_ms)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> LiftResult<()> {
        if self.elevator_count == 0 {
            return Err(LiftError::Config("elevator_count must be at least 1".into()));
        }
        self.floor_range()?;
        if !(0.0..=1.0).contains(&self.call_probability) {
            return Err(LiftError::Config(format!(
                "call_probability must be within [0, 1], got {}",
                self.call_probability
            )));
        }
        if self.max_batch == 0 {
            return Err(LiftError::Config("max_batch must be at least 1".into()));
        }
        if self.capacity == Some(0) {
            return Err(LiftError::Config("capacity must be at least 1 when set".into()));
        }
        if self.log_capacity == 0 {
            return Err(LiftError::Config("log_capacity must be at least 1".into()));
        }
        Ok(())
    }
}
