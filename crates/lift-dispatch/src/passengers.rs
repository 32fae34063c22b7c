//! Where boarding passengers want to go.

use lift_core::{Floor, FloorRange, SimRng};

/// Supplies destinations for passengers boarding a car.
///
/// Called during a service stop with the number of passengers allowed to
/// board.  Return one destination per boarding passenger.  Returning fewer
/// leaves the rest waiting at the floor; extra entries are ignored.
/// Destinations must lie in `range` and differ from `floor`.
///
/// Any `FnMut(Floor, u32) -> Vec<Floor>` closure is a `PassengerSource`,
/// which is the usual way to script boarding in tests:
///
/// ```rust,ignore
/// let mut everyone_to_lobby = |_floor: Floor, n: u32| vec![Floor(1); n as usize];
/// ```
pub trait PassengerSource {
    fn destinations(&mut self, floor: Floor, count: u32, range: &FloorRange) -> Vec<Floor>;
}

impl<F> PassengerSource for F
where
    F: FnMut(Floor, u32) -> Vec<Floor>,
{
    fn destinations(&mut self, floor: Floor, count: u32, _range: &FloorRange) -> Vec<Floor> {
        (self)(floor, count)
    }
}

// ── RandomPassengers ──────────────────────────────────────────────────────────

/// Every passenger picks a destination uniformly among all floors except
/// the one they board at.
pub struct RandomPassengers {
    rng: SimRng,
}

impl RandomPassengers {
    pub fn new(rng: SimRng) -> Self {
        Self { rng }
    }
}

impl PassengerSource for RandomPassengers {
    fn destinations(&mut self, floor: Floor, count: u32, range: &FloorRange) -> Vec<Floor> {
        (0..count)
            .map(|_| self.rng.floor_in_except(range, floor))
            .collect()
    }
}
