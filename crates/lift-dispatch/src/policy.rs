//! The `DispatchPolicy` trait: the extension point for car assignment.

use lift_core::{Direction, ElevatorId, Floor};
use lift_fleet::Elevator;

/// Chooses at most one car to answer a new floor call.
///
/// `fleet` is in ascending id order.  Returning `None` leaves the call
/// unassigned; it is not retried.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysFirst;
///
/// impl DispatchPolicy for AlwaysFirst {
///     fn select(&self, _floor: Floor, fleet: &[Elevator]) -> Option<ElevatorId> {
///         fleet.first().map(|e| e.id)
///     }
/// }
/// ```
pub trait DispatchPolicy: Send + Sync + 'static {
    fn select(&self, floor: Floor, fleet: &[Elevator]) -> Option<ElevatorId>;
}

/// Whether `elevator` may be offered a new call.
///
/// A car qualifies when it is not busy **or** its direction is `Idle`.  The
/// second arm admits a car standing at a queued floor it has not serviced
/// yet, which reports `Idle` with a non-empty queue.  A car travelling `Up`
/// or `Down` never qualifies.
#[inline]
pub fn is_eligible(elevator: &Elevator) -> bool {
    !elevator.is_busy() || elevator.direction == Direction::Idle
}

// ── NearestAvailable ──────────────────────────────────────────────────────────

/// Pick the eligible car closest to the calling floor.
///
/// Ties go to the first car in fleet order, so the choice is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestAvailable;

impl DispatchPolicy for NearestAvailable {
    fn select(&self, floor: Floor, fleet: &[Elevator]) -> Option<ElevatorId> {
        // `min_by_key` keeps the first of several equal minima.
        fleet
            .iter()
            .filter(|e| is_eligible(e))
            .min_by_key(|e| e.current_floor.distance(floor))
            .map(|e| e.id)
    }
}

// ── NoDispatch ────────────────────────────────────────────────────────────────

/// A [`DispatchPolicy`] that never assigns a car.
///
/// Every call stays a waiting count and is only served by cars that pass the
/// floor on their own business.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDispatch;

impl DispatchPolicy for NoDispatch {
    fn select(&self, _floor: Floor, _fleet: &[Elevator]) -> Option<ElevatorId> {
        None
    }
}
