//! Per-car state.

use std::collections::VecDeque;

use lift_core::{Direction, ElevatorId, Floor};

/// The mutable state of one elevator car.
///
/// A car is **busy** while it has queued destinations or passengers on
/// board.  A car that is not busy is always `Direction::Idle`; a car whose
/// direction is `Up` or `Down` is always busy.  The reverse does not hold: a
/// car standing at the floor it is about to service reports `Idle` while its
/// queue is still non-empty.
///
/// Fields are `pub` so the controller and tests can read them directly, but
/// the queue and the onboard list should be mutated through the methods
/// below, which keep the queue free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    /// Stable identity.  Never changes after construction.
    pub id: ElevatorId,

    /// The floor the car is at.  Changes by exactly one per moving tick.
    pub current_floor: Floor,

    /// Current direction of travel.
    pub direction: Direction,

    /// Target floors in FIFO order.  A floor appears at most once.
    pub destinations: VecDeque<Floor>,

    /// Destination floor of every passenger on board, one entry each.
    pub onboard: Vec<Floor>,
}

impl Elevator {
    /// A new idle, empty car on the ground floor.
    pub fn new(id: ElevatorId) -> Self {
        Self::at_floor(id, Floor::GROUND)
    }

    /// A new idle, empty car standing at `floor`.
    pub fn at_floor(id: ElevatorId, floor: Floor) -> Self {
        Self {
            id,
            current_floor: floor,
            direction:     Direction::Idle,
            destinations:  VecDeque::new(),
            onboard:       Vec::new(),
        }
    }

    /// `true` while there are queued destinations or passengers on board.
    #[inline]
    pub fn is_busy(&self) -> bool {
        !self.destinations.is_empty() || !self.onboard.is_empty()
    }

    /// Total passengers on board.
    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.onboard.len()
    }

    /// Passengers on board whose destination is `floor`.
    pub fn passenger_count_at_floor(&self, floor: Floor) -> usize {
        self.onboard.iter().filter(|&&dest| dest == floor).count()
    }

    /// The floor the car is currently heading for.
    #[inline]
    pub fn next_destination(&self) -> Option<Floor> {
        self.destinations.front().copied()
    }

    /// `true` if `floor` is anywhere in the destination queue.
    #[inline]
    pub fn has_destination(&self, floor: Floor) -> bool {
        self.destinations.contains(&floor)
    }

    /// Append `floor` to the destination queue unless it is already queued.
    ///
    /// Returns `true` when the floor was newly added.
    pub fn queue_destination(&mut self, floor: Floor) -> bool {
        if self.has_destination(floor) {
            return false;
        }
        self.destinations.push_back(floor);
        true
    }

    /// Board one passenger travelling to `destination`.
    ///
    /// The passenger is tracked individually and the destination is queued
    /// if not already present.
    pub fn add_passenger(&mut self, destination: Floor) {
        self.onboard.push(destination);
        self.queue_destination(destination);
    }

    /// Drop every onboard passenger whose destination is `floor`.
    ///
    /// Returns how many passengers left the car.
    pub fn remove_arrived_passengers(&mut self, floor: Floor) -> usize {
        let before = self.onboard.len();
        self.onboard.retain(|&dest| dest != floor);
        before - self.onboard.len()
    }

    /// Remove every occurrence of `floor` from the destination queue,
    /// preserving the order of the remaining entries.
    pub fn remove_destination(&mut self, floor: Floor) {
        self.destinations.retain(|&dest| dest != floor);
    }
}
