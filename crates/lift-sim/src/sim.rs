//! The `Sim` struct and its tick loop.

use lift_core::{ElevatorId, EventSink, Floor, SimClock, SimConfig, SimEvent, Tick};
use lift_dispatch::{CallSource, DispatchPolicy, PassengerSource};
use lift_fleet::{Fleet, FloorRegistry};
use lift_motion::ElevatorController;

use crate::recorder::Recorder;
use crate::{LogHistory, SimError, SimObserver, SimResult, SimStats, Snapshot};

/// The main simulation runner.
///
/// `Sim<P, S, C>` holds the whole building and drives the tick loop:
///
/// 1. **Call**: ask `C: CallSource` for at most one new floor call.  Its
///    passengers are added to the [`FloorRegistry`] and `P: DispatchPolicy`
///    may assign one eligible car, which queues the floor.
/// 2. **Step**: every car takes one [`ElevatorController::step`] in
///    ascending id order.  Boarding passengers get their destinations from
///    `S: PassengerSource`.
/// 3. **Advance** the clock.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DispatchPolicy, S: PassengerSource, C: CallSource> {
    /// Global configuration (counts, seed, pacing, …).
    pub config: SimConfig,

    /// Current tick plus the pacing interval.
    pub clock: SimClock,

    /// Every car, in id order.
    pub fleet: Fleet,

    /// Passengers waiting at each floor.
    pub registry: FloorRegistry,

    /// Shared per-car transition rules.
    pub controller: ElevatorController,

    /// Chooses the car that answers a new call.
    pub policy: P,

    /// Decides where boarding passengers want to go.
    pub passengers: S,

    /// Produces new floor calls.
    pub calls: C,

    pub(crate) recorder: Recorder,
}

impl<P, S, C> Sim<P, S, C>
where
    P: DispatchPolicy,
    S: PassengerSource,
    C: CallSource,
{
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.total_ticks`.
    ///
    /// With `total_ticks = None` this never returns `Ok`; the caller ends the
    /// process.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    ///
    /// # Errors
    ///
    /// A rejected call or an invalid passenger destination stops the run.
    /// The failing car is left as it was before its step, but cars earlier
    /// in id order have already stepped and the clock has not advanced, so
    /// the tick is not safe to resume.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        loop {
            let now = self.clock.current_tick;
            if end.is_some_and(|end| now >= end) {
                break;
            }
            self.run_one(now, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.run_one(now, observer)?;
        }
        Ok(())
    }

    /// Place a call from outside the tick loop, exactly as a generated call
    /// would be handled: the passengers start waiting at `floor` and the
    /// dispatch policy may assign a car.
    ///
    /// Returns the car that was assigned, if any.
    ///
    /// # Errors
    ///
    /// `LiftError::FloorOutOfRange` for a floor outside the building and
    /// `SimError::Config` for an empty call.  Nothing changes in either case.
    pub fn submit_call(&mut self, floor: Floor, passengers: u32) -> SimResult<Option<ElevatorId>> {
        self.place_call(floor, passengers)
    }

    /// Borrow the current state for rendering.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tick:      self.clock.current_tick,
            elevators: self.fleet.as_slice(),
            registry:  &self.registry,
            history:   &self.recorder.history,
            stats:     &self.recorder.stats,
        }
    }

    #[inline]
    pub fn stats(&self) -> &SimStats {
        &self.recorder.stats
    }

    #[inline]
    pub fn history(&self) -> &LogHistory {
        &self.recorder.history
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn run_one<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(now);
        self.process_tick(now)?;
        self.clock.advance();
        observer.on_tick_end(now, &self.snapshot());
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<()> {
        // ── Phase 1: at most one new call ─────────────────────────────────
        let range = self.registry.range();
        if let Some(call) = self.calls.next_call(now, &range) {
            self.place_call(call.floor, call.passengers)?;
        }

        // ── Phase 2: step every car in id order ───────────────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access.
        let controller = &self.controller;
        let registry   = &mut self.registry;
        let passengers = &mut self.passengers;
        let recorder   = &mut self.recorder;

        for car in self.fleet.iter_mut() {
            controller.step(car, &mut *registry, &mut *passengers, &mut *recorder)?;
        }

        log::trace!(
            "{now}: {} waiting, {} on board",
            self.registry.total_waiting(),
            self.fleet.passengers_onboard(),
        );
        Ok(())
    }

    /// Register `passengers` at `floor` and offer the call to the policy once.
    ///
    /// Empty and out-of-range calls are rejected before anything changes,
    /// whether they come from `submit_call` or from the `CallSource`.
    fn place_call(&mut self, floor: Floor, passengers: u32) -> SimResult<Option<ElevatorId>> {
        if passengers == 0 {
            return Err(SimError::Config(format!(
                "call at floor {floor} needs at least one passenger"
            )));
        }
        self.registry.add_waiting(floor, passengers)?;
        self.recorder.emit(SimEvent::CallPlaced { floor, passengers });

        let Some(id) = self.policy.select(floor, self.fleet.as_slice()) else {
            log::warn!("no elevator available for floor {floor}; {passengers} left waiting");
            self.recorder.emit(SimEvent::CallUnassigned { floor });
            return Ok(None);
        };

        let car = self.fleet.get_mut(id)?;
        self.controller.add_request(car, floor, &mut self.recorder)?;
        Ok(Some(id))
    }
}
