//! Integration tests for lift-sim.

use std::cell::RefCell;
use std::rc::Rc;

use lift_core::{Direction, ElevatorId, EventSink, Floor, LiftError, SimConfig, SimEvent, Tick};
use lift_dispatch::{NearestAvailable, NoCalls, NoDispatch, ScriptedCalls};

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver, Snapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(elevators: u32) -> SimConfig {
    SimConfig { elevator_count: elevators, ..SimConfig::default() }
}

/// Passenger source that sends everyone to `dest`.
fn everyone_to(dest: u32) -> impl FnMut(Floor, u32) -> Vec<Floor> {
    move |_floor, n| vec![Floor(dest); n as usize]
}

/// A sim without random calls, cars placed at `floors`, boarders heading
/// for `dest`.
fn scripted(
    floors: &[u32],
    dest:   u32,
) -> Sim<NearestAvailable, impl FnMut(Floor, u32) -> Vec<Floor>, NoCalls> {
    SimBuilder::new(config(floors.len() as u32), NearestAvailable, everyone_to(dest), NoCalls)
        .initial_floors(floors.iter().copied().map(Floor).collect())
        .build()
        .unwrap()
}

/// Sink that shares what it receives with the test.
#[derive(Clone, Default)]
struct Shared(Rc<RefCell<Vec<SimEvent>>>);

impl EventSink for Shared {
    fn emit(&mut self, event: SimEvent) {
        self.0.borrow_mut().push(event);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_reference_building_with_defaults() {
        let sim = SimBuilder::randomized(SimConfig::default()).build().unwrap();
        assert_eq!(sim.fleet.len(), 4);
        assert_eq!(sim.registry.range().len(), 10);
        assert!(sim.fleet.iter().all(|e| e.current_floor == Floor(1) && !e.is_busy()));
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
        assert_eq!(sim.history().capacity(), 5);
        assert_eq!(sim.controller.capacity(), None);
    }

    #[test]
    fn zero_elevators_rejected() {
        let result = SimBuilder::randomized(config(0)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn single_floor_building_rejected() {
        let cfg = SimConfig { floor_count: 1, ..SimConfig::default() };
        assert!(matches!(SimBuilder::randomized(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn bad_call_settings_rejected() {
        let cfg = SimConfig { call_probability: 1.5, ..SimConfig::default() };
        assert!(matches!(SimBuilder::randomized(cfg).build(), Err(SimError::Config(_))));

        let cfg = SimConfig { max_batch: 0, ..SimConfig::default() };
        assert!(matches!(SimBuilder::randomized(cfg).build(), Err(SimError::Config(_))));

        let cfg = SimConfig { log_capacity: 0, ..SimConfig::default() };
        assert!(matches!(SimBuilder::randomized(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn initial_floor_count_mismatch_errors() {
        let result = SimBuilder::new(config(4), NearestAvailable, everyone_to(1), NoCalls)
            .initial_floors(vec![Floor(1); 3])
            .build();
        assert!(matches!(
            result,
            Err(SimError::InitialFloorMismatch { expected: 4, got: 3 })
        ));
    }

    #[test]
    fn initial_floor_outside_building_errors() {
        let result = SimBuilder::new(config(2), NearestAvailable, everyone_to(1), NoCalls)
            .initial_floors(vec![Floor(2), Floor(11)])
            .build();
        assert!(matches!(
            result,
            Err(SimError::Lift(LiftError::FloorOutOfRange { floor: Floor(11), .. }))
        ));
    }

    #[test]
    fn initial_floors_placed_in_id_order() {
        let sim = scripted(&[3, 8, 5], 1);
        let floors: Vec<_> = sim.fleet.iter().map(|e| (e.id, e.current_floor)).collect();
        assert_eq!(
            floors,
            vec![
                (ElevatorId(1), Floor(3)),
                (ElevatorId(2), Floor(8)),
                (ElevatorId(3), Floor(5)),
            ]
        );
    }

    #[test]
    fn capacity_reaches_controller() {
        let sim = SimBuilder::randomized(SimConfig::default()).capacity(6).build().unwrap();
        assert_eq!(sim.controller.capacity(), Some(6));

        let result = SimBuilder::randomized(SimConfig::default()).capacity(0).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Calls and dispatch ────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn call_goes_to_nearest_idle_car() {
        let mut sim = scripted(&[1, 6, 10], 1);
        assert_eq!(sim.submit_call(Floor(7), 2).unwrap(), Some(ElevatorId(2)));
        assert_eq!(sim.registry.waiting_at(Floor(7)), 2);

        let lines: Vec<&str> = sim.history().iter().collect();
        assert_eq!(
            lines,
            vec![
                "[Call] 2 passenger(s) waiting on floor 7.",
                "[Elevator 2] Added request to floor 7.",
            ]
        );
    }

    #[test]
    fn all_cars_moving_leaves_call_unassigned() {
        let mut sim = scripted(&[1, 1, 1, 1], 1);
        for (floor, expected) in [(5, 1), (6, 2), (7, 3), (8, 4)] {
            assert_eq!(sim.submit_call(Floor(floor), 1).unwrap(), Some(ElevatorId(expected)));
        }
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert!(sim.fleet.iter().all(|e| e.direction == Direction::Up));

        let fleet_before = sim.fleet.clone();
        assert_eq!(sim.submit_call(Floor(9), 2).unwrap(), None);

        // Only the waiting count changes.
        assert_eq!(sim.fleet, fleet_before);
        assert_eq!(sim.registry.waiting_at(Floor(9)), 2);
        assert!(sim.fleet.iter().all(|e| !e.has_destination(Floor(9))));
        assert_eq!(sim.history().latest(), Some("[Call] No elevator available for floor 9."));
        assert_eq!(sim.stats().calls_unassigned, 1);
    }

    #[test]
    fn car_standing_at_its_queued_floor_still_accepts_calls() {
        let mut sim = scripted(&[3, 1], 1);
        assert_eq!(sim.submit_call(Floor(3), 1).unwrap(), Some(ElevatorId(1)));
        let car = sim.fleet.get(ElevatorId(1)).unwrap();
        assert!(car.is_busy());
        assert_eq!(car.direction, Direction::Idle);

        assert_eq!(sim.submit_call(Floor(4), 1).unwrap(), Some(ElevatorId(1)));
        let queued: Vec<_> = sim.fleet.get(ElevatorId(1)).unwrap().destinations.iter().copied().collect();
        assert_eq!(queued, vec![Floor(3), Floor(4)]);
    }

    #[test]
    fn repeated_call_for_queued_floor_not_requeued() {
        let mut sim = scripted(&[5], 1);
        sim.submit_call(Floor(5), 1).unwrap();
        sim.submit_call(Floor(5), 2).unwrap();
        let car = sim.fleet.get(ElevatorId(1)).unwrap();
        assert_eq!(car.destinations.len(), 1);
        assert_eq!(sim.registry.waiting_at(Floor(5)), 3);
    }

    #[test]
    fn rejected_calls_change_nothing() {
        let mut sim = scripted(&[1, 1], 1);
        assert!(matches!(
            sim.submit_call(Floor(0), 1),
            Err(SimError::Lift(LiftError::FloorOutOfRange { .. }))
        ));
        assert!(matches!(sim.submit_call(Floor(11), 1), Err(SimError::Lift(_))));
        assert!(matches!(sim.submit_call(Floor(4), 0), Err(SimError::Config(_))));
        assert_eq!(sim.stats().calls_placed, 0);
        assert!(sim.history().is_empty());
        assert_eq!(sim.registry.total_waiting(), 0);
    }

    #[test]
    fn empty_scripted_call_rejected_before_anything_changes() {
        let calls = ScriptedCalls::new().at(Tick(0), Floor(6), 0);
        let mut sim = SimBuilder::new(config(1), NearestAvailable, everyone_to(1), calls)
            .build()
            .unwrap();

        assert!(matches!(sim.run_ticks(1, &mut NoopObserver), Err(SimError::Config(_))));
        assert_eq!(sim.stats().calls_placed, 0);
        assert!(sim.history().is_empty());
        assert_eq!(sim.registry.total_waiting(), 0);
        assert!(!sim.fleet.get(ElevatorId(1)).unwrap().is_busy());
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn no_dispatch_policy_only_registers_waiting() {
        let mut sim = SimBuilder::new(config(2), NoDispatch, everyone_to(1), NoCalls)
            .build()
            .unwrap();
        assert_eq!(sim.submit_call(Floor(6), 4).unwrap(), None);
        assert_eq!(sim.registry.waiting_at(Floor(6)), 4);
        assert!(sim.fleet.iter().all(|e| !e.is_busy()));
    }

    #[test]
    fn scripted_call_is_dispatched_and_stepped_in_same_tick() {
        let calls = ScriptedCalls::new().at(Tick(2), Floor(4), 1);
        let mut sim = SimBuilder::new(config(1), NearestAvailable, everyone_to(10), calls)
            .build()
            .unwrap();

        sim.run_ticks(2, &mut NoopObserver).unwrap();
        assert!(sim.history().is_empty());

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        let lines: Vec<&str> = sim.history().iter().collect();
        assert_eq!(
            lines,
            vec![
                "[Call] 1 passenger(s) waiting on floor 4.",
                "[Elevator 1] Added request to floor 4.",
                "[Elevator 1] Moving Up to floor 2...",
            ]
        );
        assert_eq!(sim.fleet.get(ElevatorId(1)).unwrap().current_floor, Floor(2));
    }
}

// ── Full journeys ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod journey_tests {
    use super::*;

    #[test]
    fn three_waiting_at_seven_are_collected_and_delivered() {
        let mut sim = scripted(&[3], 1);
        sim.submit_call(Floor(7), 3).unwrap();

        sim.run_ticks(4, &mut NoopObserver).unwrap();
        let car = sim.fleet.get(ElevatorId(1)).unwrap();
        assert_eq!(car.current_floor, Floor(7));
        assert_eq!(sim.registry.waiting_at(Floor(7)), 3, "stop not serviced yet");

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        let car = sim.fleet.get(ElevatorId(1)).unwrap();
        assert_eq!(sim.registry.waiting_at(Floor(7)), 0);
        assert_eq!(car.passenger_count(), 3);
        assert_eq!(car.direction, Direction::Down);
        assert_eq!(sim.stats().passengers_boarded, 3);
        assert_eq!(sim.stats().floors_travelled, 4);

        // Six floors down, then the drop-off stop.
        sim.run_ticks(7, &mut NoopObserver).unwrap();
        let car = sim.fleet.get(ElevatorId(1)).unwrap();
        assert_eq!(car.current_floor, Floor(1));
        assert!(!car.is_busy());
        assert_eq!(car.direction, Direction::Idle);
        assert_eq!(sim.stats().passengers_delivered, 3);
        assert_eq!(sim.stats().floors_travelled, 10);
        assert_eq!(sim.history().latest(), Some("[Elevator 1] 3 passenger(s) disembark."));
    }

    #[test]
    fn capacity_leaves_overflow_waiting() {
        let mut sim = SimBuilder::new(config(1), NearestAvailable, everyone_to(6), NoCalls)
            .capacity(2)
            .build()
            .unwrap();
        sim.submit_call(Floor(1), 5).unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();

        assert_eq!(sim.fleet.get(ElevatorId(1)).unwrap().passenger_count(), 2);
        assert_eq!(sim.registry.waiting_at(Floor(1)), 3);
        assert_eq!(sim.history().latest(), Some("[Elevator 1] Picked up 2 passenger(s)."));
    }
}

// ── Run loop, observers, history ──────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        starts:   u64,
        ends:     u64,
        sim_end:  Option<Tick>,
        lag_ok:   bool,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }

        fn on_tick_end(&mut self, tick: Tick, snapshot: &Snapshot<'_>) {
            self.ends += 1;
            self.lag_ok = snapshot.tick == tick.offset(1);
        }

        fn on_sim_end(&mut self, final_tick: Tick) {
            self.sim_end = Some(final_tick);
        }
    }

    #[test]
    fn run_stops_at_total_ticks() {
        let cfg = SimConfig { total_ticks: Some(12), ..SimConfig::default() };
        let mut sim = SimBuilder::randomized(cfg).build().unwrap();
        let mut obs = Counter::default();
        sim.run(&mut obs).unwrap();

        assert_eq!(obs.starts, 12);
        assert_eq!(obs.ends, 12);
        assert!(obs.lag_ok);
        assert_eq!(obs.sim_end, Some(Tick(12)));
        assert_eq!(sim.clock.current_tick, Tick(12));
    }

    #[test]
    fn run_ticks_ignores_total_ticks() {
        let cfg = SimConfig { total_ticks: Some(3), ..SimConfig::default() };
        let mut sim = SimBuilder::randomized(cfg).build().unwrap();
        let mut obs = Counter::default();
        sim.run_ticks(8, &mut obs).unwrap();
        assert_eq!(obs.ends, 8);
        assert_eq!(obs.sim_end, None);
        assert_eq!(sim.clock.current_tick, Tick(8));
    }

    #[test]
    fn same_seed_same_run() {
        let cfg = SimConfig { seed: 7, ..SimConfig::default() };
        let mut a = SimBuilder::randomized(cfg.clone()).build().unwrap();
        let mut b = SimBuilder::randomized(cfg).build().unwrap();
        a.run_ticks(300, &mut NoopObserver).unwrap();
        b.run_ticks(300, &mut NoopObserver).unwrap();

        assert_eq!(a.fleet, b.fleet);
        assert_eq!(a.registry, b.registry);
        assert_eq!(a.history(), b.history());
        assert_eq!(a.stats(), b.stats());
        assert!(a.stats().calls_placed > 0);
    }

    #[test]
    fn history_keeps_most_recent_lines() {
        let shared = Shared::default();
        let mut sim = SimBuilder::randomized(SimConfig::default())
            .sink(shared.clone())
            .build()
            .unwrap();
        sim.run_ticks(100, &mut NoopObserver).unwrap();

        let all = shared.0.borrow();
        assert!(all.len() > 5);
        let expected: Vec<String> = all[all.len() - 5..].iter().map(ToString::to_string).collect();
        let kept: Vec<&str> = sim.history().iter().collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn history_capacity_follows_config() {
        let cfg = SimConfig { log_capacity: 2, ..SimConfig::default() };
        let mut sim = SimBuilder::new(cfg, NearestAvailable, everyone_to(1), NoCalls)
            .initial_floors(vec![Floor(1); 4])
            .build()
            .unwrap();
        sim.submit_call(Floor(3), 1).unwrap();
        sim.submit_call(Floor(4), 1).unwrap();
        assert_eq!(sim.history().len(), 2);
        assert_eq!(
            sim.history().iter().collect::<Vec<_>>(),
            vec!["[Call] 1 passenger(s) waiting on floor 4.", "[Elevator 2] Added request to floor 4."]
        );
    }

    #[derive(Default)]
    struct InvariantChecker {
        ticks: u64,
    }

    impl SimObserver for InvariantChecker {
        fn on_tick_end(&mut self, tick: Tick, snapshot: &Snapshot<'_>) {
            self.ticks += 1;
            let mut onboard = 0u64;
            for car in snapshot.elevators {
                if !car.is_busy() {
                    assert_eq!(car.direction, Direction::Idle, "{tick}: idle car {}", car.id);
                }
                if car.direction.is_moving() {
                    assert!(car.is_busy(), "{tick}: car {} moving without work", car.id);
                }
                assert!(car.onboard.iter().all(|d| car.has_destination(*d)));
                onboard += car.passenger_count() as u64;
            }
            // Every called passenger is waiting, riding, or delivered.
            let stats = snapshot.stats;
            assert_eq!(
                stats.passengers_called,
                snapshot.registry.total_waiting() + onboard + stats.passengers_delivered,
                "{tick}: passengers lost"
            );
        }
    }

    #[test]
    fn long_random_run_keeps_invariants() {
        let cfg = SimConfig { seed: 99, call_probability: 0.6, ..SimConfig::default() };
        let mut sim = SimBuilder::randomized(cfg).capacity(8).build().unwrap();
        let mut checker = InvariantChecker::default();
        sim.run_ticks(2_000, &mut checker).unwrap();
        assert_eq!(checker.ticks, 2_000);
        assert!(sim.stats().passengers_delivered > 0);
    }
}
