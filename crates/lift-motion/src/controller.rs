//! The `ElevatorController`: request intake and the per-tick transition.

use lift_core::{Direction, EventSink, Floor, FloorRange, LiftError, LiftResult, SimEvent};
use lift_dispatch::PassengerSource;
use lift_fleet::{Elevator, FloorRegistry};

use crate::StepOutcome;

/// Drives individual cars through the idle / moving / stopped cycle.
///
/// The controller owns no car state and no log buffer: every call receives
/// the car to mutate, the shared [`FloorRegistry`], the [`PassengerSource`]
/// that decides where boarders go, and the [`EventSink`] that receives one
/// [`SimEvent`] per transition.  One controller serves the whole fleet.
#[derive(Debug, Clone, Copy)]
pub struct ElevatorController {
    range:    FloorRange,
    capacity: Option<u32>,
}

impl ElevatorController {
    /// A controller for a building spanning `range`, with unlimited car
    /// capacity.
    pub fn new(range: FloorRange) -> Self {
        Self { range, capacity: None }
    }

    /// Limit onboard passengers per car.  Passengers who do not fit stay
    /// waiting at the floor.
    pub fn with_capacity(mut self, capacity: Option<u32>) -> Self {
        self.capacity = capacity;
        self
    }

    #[inline]
    pub fn range(&self) -> FloorRange {
        self.range
    }

    #[inline]
    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }

    // ── Request intake ────────────────────────────────────────────────────

    /// Queue a stop at `floor` for `elevator`.
    ///
    /// A floor already in the queue is not added again.  Returns `true` when
    /// the floor was newly queued (and `RequestAdded` emitted).
    ///
    /// # Errors
    ///
    /// `LiftError::FloorOutOfRange` if `floor` is not in the building; the
    /// car is left untouched.
    pub fn add_request<S>(
        &self,
        elevator: &mut Elevator,
        floor:    Floor,
        sink:     &mut S,
    ) -> LiftResult<bool>
    where
        S: EventSink + ?Sized,
    {
        let floor = self.range.check(floor)?;
        if !elevator.queue_destination(floor) {
            return Ok(false);
        }
        refresh_direction(elevator);
        sink.emit(SimEvent::RequestAdded { elevator: elevator.id, floor });
        Ok(true)
    }

    // ── Per-tick transition ───────────────────────────────────────────────

    /// Advance `elevator` by one tick.
    ///
    /// Moves at most one floor, or performs a complete service stop (drop
    /// off, pick up, dequeue) when the car stands at the front of its queue.
    /// The direction is recomputed afterwards.
    ///
    /// # Errors
    ///
    /// Fails only when `passengers` hands out a destination outside the
    /// building or equal to the boarding floor.  Nothing is changed and no
    /// event is emitted in that case.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the car is busy with an empty destination
    /// queue, which no sequence of controller calls can produce.
    pub fn step<P, S>(
        &self,
        elevator:   &mut Elevator,
        registry:   &mut FloorRegistry,
        passengers: &mut P,
        sink:       &mut S,
    ) -> LiftResult<StepOutcome>
    where
        P: PassengerSource + ?Sized,
        S: EventSink + ?Sized,
    {
        if !elevator.is_busy() {
            elevator.direction = Direction::Idle;
            return Ok(StepOutcome::Idle);
        }

        let Some(target) = elevator.next_destination() else {
            debug_assert!(
                false,
                "elevator {} carries passengers but has no destinations",
                elevator.id
            );
            // Release builds recover by re-queuing every onboard destination.
            log::error!("elevator {} lost its destination queue; rebuilding it", elevator.id);
            let onboard = elevator.onboard.clone();
            for dest in onboard {
                elevator.queue_destination(dest);
            }
            refresh_direction(elevator);
            return Ok(StepOutcome::Idle);
        };

        let outcome = if elevator.current_floor == target {
            self.service_stop(elevator, registry, passengers, sink)?
        } else {
            move_one_floor(elevator, target, sink)
        };

        refresh_direction(elevator);
        log::trace!("elevator {} {outcome:?}, now {}", elevator.id, elevator.direction);
        Ok(outcome)
    }

    /// Drop off, pick up, and dequeue the current floor.
    ///
    /// Boarding destinations are collected and checked before anything
    /// changes, so a rejected destination leaves the car, the registry and
    /// the event stream untouched.
    fn service_stop<P, S>(
        &self,
        elevator:   &mut Elevator,
        registry:   &mut FloorRegistry,
        passengers: &mut P,
        sink:       &mut S,
    ) -> LiftResult<StepOutcome>
    where
        P: PassengerSource + ?Sized,
        S: EventSink + ?Sized,
    {
        let id = elevator.id;
        let floor = elevator.current_floor;

        // ── Plan boarding ─────────────────────────────────────────────────
        let staying = elevator.passenger_count() - elevator.passenger_count_at_floor(floor);
        let room = match self.capacity {
            Some(cap) => cap.saturating_sub(staying as u32),
            None      => u32::MAX,
        };
        let boarding = registry.waiting_at(floor).min(room);

        let destinations: Vec<Floor> = if boarding > 0 {
            passengers
                .destinations(floor, boarding, &self.range)
                .into_iter()
                .take(boarding as usize)
                .collect()
        } else {
            Vec::new()
        };
        for &dest in &destinations {
            self.check_destination(floor, dest)?;
        }

        sink.emit(SimEvent::Arrived { elevator: id, floor });

        // ── Drop off ──────────────────────────────────────────────────────
        let dropped_off = elevator.remove_arrived_passengers(floor) as u32;
        if dropped_off > 0 {
            sink.emit(SimEvent::DroppedOff { elevator: id, floor, count: dropped_off });
        }

        // ── Pick up ───────────────────────────────────────────────────────
        let waiting = registry.drain_waiting(floor);
        let picked_up = destinations.len() as u32;
        for dest in destinations {
            elevator.add_passenger(dest);
        }
        let left_behind = waiting - picked_up;
        if left_behind > 0 {
            registry.add_waiting(floor, left_behind)?;
        }
        if picked_up > 0 {
            sink.emit(SimEvent::PickedUp { elevator: id, floor, count: picked_up });
        }

        // ── Dequeue ───────────────────────────────────────────────────────
        elevator.remove_destination(floor);

        Ok(StepOutcome::Serviced { floor, dropped_off, picked_up })
    }

    fn check_destination(&self, boarded_at: Floor, dest: Floor) -> LiftResult<()> {
        self.range.check(dest)?;
        if dest == boarded_at {
            return Err(LiftError::InvalidDestination {
                floor:  dest,
                reason: "passenger would alight at the floor they boarded",
            });
        }
        Ok(())
    }
}

// ── Free helpers ──────────────────────────────────────────────────────────────

/// Move exactly one floor towards `target` and report it.
fn move_one_floor<S>(elevator: &mut Elevator, target: Floor, sink: &mut S) -> StepOutcome
where
    S: EventSink + ?Sized,
{
    let from = elevator.current_floor;
    let direction = from.direction_to(target);
    elevator.direction = direction;
    elevator.current_floor = from.step_toward(target);
    sink.emit(SimEvent::Moving {
        elevator: elevator.id,
        direction,
        floor:    elevator.current_floor,
    });
    StepOutcome::Moved { from, to: elevator.current_floor }
}

/// Recompute `elevator.direction` from its state.
///
/// `Idle` when not busy; otherwise the direction towards the front of the
/// queue, which is `Idle` while the car stands at that floor.
pub fn refresh_direction(elevator: &mut Elevator) {
    elevator.direction = match elevator.next_destination() {
        Some(front) => elevator.current_floor.direction_to(front),
        None        => Direction::Idle,
    };
}
