//! Simulation observer trait for rendering and data collection.

use lift_core::Tick;

use crate::Snapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: waiting-count printer
///
/// ```rust,ignore
/// struct Waiting;
///
/// impl SimObserver for Waiting {
///     fn on_tick_end(&mut self, tick: Tick, snapshot: &Snapshot<'_>) {
///         println!("{tick}: {} waiting", snapshot.registry.total_waiting());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once `tick` has been fully processed.
    ///
    /// The snapshot borrows the live state; copy out whatever must outlive
    /// the call.
    fn on_tick_end(&mut self, _tick: Tick, _snapshot: &Snapshot<'_>) {}

    /// Called once after the final tick of a bounded run.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
