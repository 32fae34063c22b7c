//! The `FloorRegistry`: how many passengers wait at each floor.

use lift_core::{Floor, FloorRange, LiftResult};

/// Waiting-passenger counts for every floor of the building.
///
/// Waiting passengers are fungible: only the count per floor is tracked, not
/// who arrived first.  Counts are incremented by call generation and
/// decremented (to zero) when a car services the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRegistry {
    range:   FloorRange,
    /// Indexed by `range.offset(floor)`; always `range.len()` long.
    waiting: Vec<u32>,
}

impl FloorRegistry {
    /// Create a registry for `range` with nobody waiting.
    pub fn new(range: FloorRange) -> Self {
        Self { range, waiting: vec![0; range.len()] }
    }

    /// The floor range this registry covers.
    #[inline]
    pub fn range(&self) -> FloorRange {
        self.range
    }

    /// Passengers currently waiting at `floor`.  Zero outside the building.
    pub fn waiting_at(&self, floor: Floor) -> u32 {
        if self.range.contains(floor) {
            self.waiting[self.range.offset(floor)]
        } else {
            0
        }
    }

    /// Add `count` waiting passengers at `floor`.
    ///
    /// # Errors
    ///
    /// `LiftError::FloorOutOfRange` if `floor` is not in the building.
    pub fn add_waiting(&mut self, floor: Floor, count: u32) -> LiftResult<()> {
        let floor = self.range.check(floor)?;
        let slot = &mut self.waiting[self.range.offset(floor)];
        *slot = slot.saturating_add(count);
        Ok(())
    }

    /// Take every passenger waiting at `floor`, leaving zero behind.
    ///
    /// Returns the number taken.  Floors outside the building have nobody
    /// waiting and return zero.
    pub fn drain_waiting(&mut self, floor: Floor) -> u32 {
        if !self.range.contains(floor) {
            return 0;
        }
        std::mem::take(&mut self.waiting[self.range.offset(floor)])
    }

    /// Passengers waiting across all floors.
    pub fn total_waiting(&self) -> u64 {
        self.waiting.iter().map(|&n| n as u64).sum()
    }

    /// `(floor, waiting)` pairs in ascending floor order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Floor, u32)> + '_ {
        let lowest = self.range.lowest.0;
        self.waiting
            .iter()
            .enumerate()
            .map(move |(i, &count)| (Floor(lowest + i as u32), count))
    }
}
