//! `lift-sim`: tick loop orchestrator for the rust_lift simulation.
//!
//! # Tick loop
//!
//! ```text
//! each tick:
//!   ① Call:    the CallSource may yield one FloorCall; its passengers
//!              start waiting and the DispatchPolicy picks at most one
//!              eligible car, which queues the floor.
//!   ② Step:    every car advances one state-machine step, in id order.
//!   ③ Advance: the clock moves to the next tick.
//! ```
//!
//! Every transition is reported as a `SimEvent`.  The sim keeps the most
//! recent lines in a bounded [`LogHistory`], folds them into [`SimStats`],
//! and forwards them to an optional caller-supplied `EventSink`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { total_ticks: Some(100), ..SimConfig::default() };
//! let mut sim = SimBuilder::randomized(config).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod stats;

mod recorder;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use history::LogHistory;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::Snapshot;
pub use stats::SimStats;
