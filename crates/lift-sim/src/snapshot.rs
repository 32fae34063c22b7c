//! Read-only view of the sim between ticks.

use lift_core::{Floor, Tick};
use lift_fleet::{Elevator, FloorRegistry};

use crate::{LogHistory, SimStats};

/// Everything a renderer needs, borrowed from the live [`Sim`][crate::Sim].
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Ticks completed so far.
    pub tick:      Tick,
    /// Cars in ascending id order.
    pub elevators: &'a [Elevator],
    pub registry:  &'a FloorRegistry,
    pub history:   &'a LogHistory,
    pub stats:     &'a SimStats,
}

impl<'a> Snapshot<'a> {
    #[inline]
    pub fn waiting_at(&self, floor: Floor) -> u32 {
        self.registry.waiting_at(floor)
    }

    /// Recent log lines, oldest first.
    pub fn recent_lines(&self) -> impl DoubleEndedIterator<Item = &'a str> + use<'a> {
        self.history.iter()
    }
}
