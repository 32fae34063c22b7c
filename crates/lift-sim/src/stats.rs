//! Cumulative run counters.

use lift_core::SimEvent;

/// Totals since tick 0, folded from the event stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub calls_placed:         u64,
    /// Calls for which no car was eligible.
    pub calls_unassigned:     u64,
    pub passengers_called:    u64,
    pub passengers_boarded:   u64,
    pub passengers_delivered: u64,
    /// Sum over all cars of single-floor moves.
    pub floors_travelled:     u64,
}

impl SimStats {
    pub fn record(&mut self, event: &SimEvent) {
        match *event {
            SimEvent::CallPlaced { passengers, .. } => {
                self.calls_placed += 1;
                self.passengers_called += u64::from(passengers);
            }
            SimEvent::CallUnassigned { .. }      => self.calls_unassigned += 1,
            SimEvent::Moving { .. }              => self.floors_travelled += 1,
            SimEvent::DroppedOff { count, .. }   => self.passengers_delivered += u64::from(count),
            SimEvent::PickedUp { count, .. }     => self.passengers_boarded += u64::from(count),
            SimEvent::RequestAdded { .. } | SimEvent::Arrived { .. } => {}
        }
    }
}
