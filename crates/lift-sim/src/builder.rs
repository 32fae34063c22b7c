//! Fluent builder for constructing a [`Sim`].

use lift_core::{ElevatorId, EventSink, Floor, LiftError, LogSink, SimConfig, SimRng};
use lift_dispatch::{
    CallSource, DispatchPolicy, NearestAvailable, PassengerSource, RandomCalls, RandomPassengers,
};
use lift_fleet::{Fleet, FloorRegistry};
use lift_motion::ElevatorController;

use crate::recorder::Recorder;
use crate::{Sim, SimError, SimResult};

/// RNG stream offsets for the capabilities built by [`SimBuilder::randomized`].
const CALLS_STREAM:      u64 = 1;
const PASSENGERS_STREAM: u64 = 2;

/// Fluent builder for [`Sim<P, S, C>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: counts, seed, call rate, pacing, …
/// - `P: DispatchPolicy`: who answers a call (e.g. [`NearestAvailable`])
/// - `S: PassengerSource`: where boarders go (a closure works)
/// - `C: CallSource`: where calls come from (e.g. [`RandomCalls`])
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                          |
/// |------------------------|----------------------------------|
/// | `.sink(s)`             | `LogSink` (events at `info`)     |
/// | `.capacity(n)`         | `config.capacity`                |
/// | `.initial_floors(v)`   | Every car on the ground floor    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, NearestAvailable, everyone_to_lobby, NoCalls)
///     .initial_floors(vec![Floor(1), Floor(5)])
///     .build()?;
/// sim.submit_call(Floor(7), 3)?;
/// sim.run_ticks(10, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: DispatchPolicy, S: PassengerSource, C: CallSource> {
    config:     SimConfig,
    policy:     P,
    passengers: S,
    calls:      C,
    sink:       Option<Box<dyn EventSink>>,
    floors:     Option<Vec<Floor>>,
}

impl SimBuilder<NearestAvailable, RandomPassengers, RandomCalls> {
    /// The standard building: nearest-available dispatch, random calls and
    /// random destinations, every stream derived from `config.seed`.
    pub fn randomized(config: SimConfig) -> Self {
        let mut root = SimRng::new(config.seed);
        let calls = RandomCalls::from_config(&config, root.child(CALLS_STREAM));
        let passengers = RandomPassengers::new(root.child(PASSENGERS_STREAM));
        Self::new(config, NearestAvailable, passengers, calls)
    }
}

impl<P, S, C> SimBuilder<P, S, C>
where
    P: DispatchPolicy,
    S: PassengerSource,
    C: CallSource,
{
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, policy: P, passengers: S, calls: C) -> Self {
        Self {
            config,
            policy,
            passengers,
            calls,
            sink:   None,
            floors: None,
        }
    }

    /// Also send every event to `sink`.  Replaces the default `LogSink`.
    pub fn sink<K: EventSink + 'static>(mut self, sink: K) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Limit every car to `capacity` onboard passengers.
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.config.capacity = Some(capacity);
        self
    }

    /// Start car `i + 1` at `floors[i]`.
    ///
    /// Must be length `elevator_count`, every floor inside the building.
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Validate inputs, place the cars, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P, S, C>> {
        // ── Validate configuration ────────────────────────────────────────
        self.config.validate().map_err(|e| match e {
            LiftError::Config(msg) => SimError::Config(msg),
            other                  => SimError::Lift(other),
        })?;
        let range = self.config.floor_range()?;
        let count = self.config.elevator_count as usize;

        // ── Build the fleet and place the cars ────────────────────────────
        let mut fleet = Fleet::new(count);
        if let Some(floors) = self.floors {
            if floors.len() != count {
                return Err(SimError::InitialFloorMismatch {
                    expected: count,
                    got:      floors.len(),
                });
            }
            for (i, floor) in floors.into_iter().enumerate() {
                fleet.place(ElevatorId::from_index(i), range.check(floor)?)?;
            }
        }

        let controller = ElevatorController::new(range).with_capacity(self.config.capacity);
        let sink: Box<dyn EventSink> = match self.sink {
            Some(sink) => sink,
            None       => Box::new(LogSink),
        };

        log::debug!(
            "built sim: {count} elevators, floors {range}, seed {}, call probability {}",
            self.config.seed,
            self.config.call_probability,
        );

        Ok(Sim {
            clock:      self.config.make_clock(),
            recorder:   Recorder::new(self.config.log_capacity, sink),
            config:     self.config,
            fleet,
            registry:   FloorRegistry::new(range),
            controller,
            policy:     self.policy,
            passengers: self.passengers,
            calls:      self.calls,
        })
    }
}
