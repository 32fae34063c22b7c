//! Floor-call generation.

use std::collections::BTreeMap;

use lift_core::{Floor, FloorRange, SimConfig, SimRng, Tick};

/// A request for service at a floor, consumed immediately by dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorCall {
    pub floor:        Floor,
    /// How many passengers start waiting there.
    pub passengers:   u32,
    pub requested_at: Tick,
}

/// Produces at most one new floor call per tick.
pub trait CallSource {
    fn next_call(&mut self, now: Tick, range: &FloorRange) -> Option<FloorCall>;
}

impl<C: CallSource + ?Sized> CallSource for Box<C> {
    fn next_call(&mut self, now: Tick, range: &FloorRange) -> Option<FloorCall> {
        (**self).next_call(now, range)
    }
}

// ── RandomCalls ───────────────────────────────────────────────────────────────

/// With probability `probability` per tick, a call at a uniformly chosen
/// floor carrying `1..=max_batch` passengers.
pub struct RandomCalls {
    rng:         SimRng,
    probability: f64,
    max_batch:   u32,
}

impl RandomCalls {
    pub fn new(rng: SimRng, probability: f64, max_batch: u32) -> Self {
        Self { rng, probability, max_batch: max_batch.max(1) }
    }

    /// Use the call probability and batch size from `config`.
    pub fn from_config(config: &SimConfig, rng: SimRng) -> Self {
        Self::new(rng, config.call_probability, config.max_batch)
    }
}

impl CallSource for RandomCalls {
    fn next_call(&mut self, now: Tick, range: &FloorRange) -> Option<FloorCall> {
        if !self.rng.gen_bool(self.probability) {
            return None;
        }
        let floor = self.rng.floor_in(range);
        let passengers = self.rng.gen_range(1..=self.max_batch);
        Some(FloorCall { floor, passengers, requested_at: now })
    }
}

// ── ScriptedCalls ─────────────────────────────────────────────────────────────

/// Calls at predetermined ticks.  A second call scripted for a tick that
/// already has one replaces it.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCalls {
    script: BTreeMap<Tick, (Floor, u32)>,
}

impl ScriptedCalls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `passengers` to call at `floor` on tick `at`.
    pub fn at(mut self, at: Tick, floor: Floor, passengers: u32) -> Self {
        self.script.insert(at, (floor, passengers));
        self
    }

    /// Scripted calls not yet delivered.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl CallSource for ScriptedCalls {
    fn next_call(&mut self, now: Tick, _range: &FloorRange) -> Option<FloorCall> {
        let (floor, passengers) = self.script.remove(&now)?;
        Some(FloorCall { floor, passengers, requested_at: now })
    }
}

// ── NoCalls ───────────────────────────────────────────────────────────────────

/// A [`CallSource`] that never calls.  Drive the sim with
/// `Sim::submit_call` instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCalls;

impl CallSource for NoCalls {
    fn next_call(&mut self, _now: Tick, _range: &FloorRange) -> Option<FloorCall> {
        None
    }
}
