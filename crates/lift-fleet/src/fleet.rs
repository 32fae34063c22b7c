//! The `Fleet`: every car, indexed by `ElevatorId`.

use lift_core::{ElevatorId, Floor, LiftError, LiftResult};

use crate::Elevator;

/// All cars of the building, in ascending id order.
///
/// Ids are `1..=count` and `elevators[id.index()]` is the car with that id,
/// so iteration order is id order.  Cars are created once and never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    elevators: Vec<Elevator>,
}

impl Fleet {
    /// `count` idle cars on the ground floor.
    pub fn new(count: usize) -> Self {
        let elevators = (0..count)
            .map(|i| Elevator::new(ElevatorId::from_index(i)))
            .collect();
        Self { elevators }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elevators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elevators.is_empty()
    }

    pub fn get(&self, id: ElevatorId) -> LiftResult<&Elevator> {
        id.0.checked_sub(1)
            .and_then(|i| self.elevators.get(i as usize))
            .ok_or(LiftError::ElevatorNotFound(id))
    }

    pub fn get_mut(&mut self, id: ElevatorId) -> LiftResult<&mut Elevator> {
        id.0.checked_sub(1)
            .and_then(|i| self.elevators.get_mut(i as usize))
            .ok_or(LiftError::ElevatorNotFound(id))
    }

    /// Teleport an idle car to `floor` without travelling (initial placement).
    pub fn place(&mut self, id: ElevatorId, floor: Floor) -> LiftResult<()> {
        self.get_mut(id)?.current_floor = floor;
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Elevator> {
        self.elevators.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Elevator> {
        self.elevators.iter_mut()
    }

    /// Passengers on board across the whole fleet.
    pub fn passengers_onboard(&self) -> usize {
        self.elevators.iter().map(Elevator::passenger_count).sum()
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item     = &'a Elevator;
    type IntoIter = std::slice::Iter<'a, Elevator>;

    fn into_iter(self) -> Self::IntoIter {
        self.elevators.iter()
    }
}
