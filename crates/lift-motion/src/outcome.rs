//! The result of stepping one car.

use lift_core::Floor;

/// What [`ElevatorController::step`][crate::ElevatorController::step] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing to do; the car stayed put.
    Idle,

    /// The car travelled one floor.
    Moved { from: Floor, to: Floor },

    /// The car completed a service stop at `floor`.
    Serviced {
        floor:       Floor,
        dropped_off: u32,
        picked_up:   u32,
    },
}

impl StepOutcome {
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }

    #[inline]
    pub fn is_service(&self) -> bool {
        matches!(self, StepOutcome::Serviced { .. })
    }
}
