//! Floors and the building's fixed floor range.

use std::fmt;

use crate::{Direction, LiftError, LiftResult};

// ── Floor ────────────────────────────────────────────────────────────────────

/// A floor number.  The ground floor is `Floor(1)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    pub const GROUND: Floor = Floor(1);

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The direction of travel from `self` towards `target`.
    /// `Idle` when they are the same floor.
    #[inline]
    pub fn direction_to(self, target: Floor) -> Direction {
        match self.cmp(&target) {
            std::cmp::Ordering::Less    => Direction::Up,
            std::cmp::Ordering::Greater => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Idle,
        }
    }

    /// The adjacent floor one step towards `target` (or `self` if already there).
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        match self.direction_to(target) {
            Direction::Up   => Floor(self.0 + 1),
            Direction::Down => Floor(self.0 - 1),
            Direction::Idle => self,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── FloorRange ───────────────────────────────────────────────────────────────

/// The inclusive floor range `[lowest, highest]` served by the building.
///
/// Fixed at construction; every floor call and passenger destination is
/// checked against it at the boundary so out-of-range floors never reach the
/// elevator state machine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRange {
    pub lowest:  Floor,
    pub highest: Floor,
}

impl FloorRange {
    /// Floors `1..=floor_count`.
    ///
    /// At least two floors are required: a passenger always travels to a
    /// floor other than the one they boarded at.
    pub fn new(floor_count: u32) -> LiftResult<Self> {
        if floor_count < 2 {
            return Err(LiftError::Config(format!(
                "a building needs at least 2 floors, got {floor_count}"
            )));
        }
        Ok(Self { lowest: Floor::GROUND, highest: Floor(floor_count) })
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.lowest <= floor && floor <= self.highest
    }

    /// `Ok(floor)` if it is inside the building, `FloorOutOfRange` otherwise.
    pub fn check(&self, floor: Floor) -> LiftResult<Floor> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(LiftError::FloorOutOfRange { floor, range: *self })
        }
    }

    /// Number of floors in the range.
    #[inline]
    pub fn len(&self) -> usize {
        (self.highest.0 - self.lowest.0 + 1) as usize
    }

    /// Always `false`; a range holds at least two floors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of `floor` within the range, for indexing per-floor arrays.
    #[inline]
    pub fn offset(&self, floor: Floor) -> usize {
        (floor.0 - self.lowest.0) as usize
    }

    /// Floors in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Floor> + use<> {
        (self.lowest.0..=self.highest.0).map(Floor)
    }
}

impl Default for FloorRange {
    /// The reference building: floors 1 through 10.
    fn default() -> Self {
        Self { lowest: Floor::GROUND, highest: Floor(10) }
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.lowest, self.highest)
    }
}
