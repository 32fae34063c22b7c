//! Simulation events and the sink capability that receives them.
//!
//! The engine never prints and never buffers.  Every meaningful transition
//! (a call placed, a request queued, a car moving, arriving, unloading,
//! loading) is reported as one [`SimEvent`] handed to a caller-supplied
//! [`EventSink`].  `Display` renders the human-readable log line.

use std::fmt;

use crate::{Direction, ElevatorId, Floor};

/// One reportable transition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    /// `passengers` new passengers started waiting at `floor`.
    CallPlaced { floor: Floor, passengers: u32 },

    /// No car was eligible for the call at `floor`; it stays a waiting count.
    CallUnassigned { floor: Floor },

    /// `floor` was appended to the car's destination queue.
    RequestAdded { elevator: ElevatorId, floor: Floor },

    /// The car moved one floor and is now at `floor`.
    Moving { elevator: ElevatorId, direction: Direction, floor: Floor },

    /// The car began a service stop at `floor`.
    Arrived { elevator: ElevatorId, floor: Floor },

    /// `count` onboard passengers left the car.
    DroppedOff { elevator: ElevatorId, floor: Floor, count: u32 },

    /// `count` waiting passengers boarded the car.
    PickedUp { elevator: ElevatorId, floor: Floor, count: u32 },
}

impl SimEvent {
    /// The car this event concerns, if any.
    pub fn elevator(&self) -> Option<ElevatorId> {
        match *self {
            SimEvent::CallPlaced { .. } | SimEvent::CallUnassigned { .. } => None,
            SimEvent::RequestAdded { elevator, .. }
            | SimEvent::Moving { elevator, .. }
            | SimEvent::Arrived { elevator, .. }
            | SimEvent::DroppedOff { elevator, .. }
            | SimEvent::PickedUp { elevator, .. } => Some(elevator),
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::CallPlaced { floor, passengers } => {
                write!(f, "[Call] {passengers} passenger(s) waiting on floor {floor}.")
            }
            SimEvent::CallUnassigned { floor } => {
                write!(f, "[Call] No elevator available for floor {floor}.")
            }
            SimEvent::RequestAdded { elevator, floor } => {
                write!(f, "[Elevator {elevator}] Added request to floor {floor}.")
            }
            SimEvent::Moving { elevator, direction, floor } => {
                write!(f, "[Elevator {elevator}] Moving {direction} to floor {floor}...")
            }
            SimEvent::Arrived { elevator, floor } => {
                write!(f, "[Elevator {elevator}] Arrived at floor {floor}.")
            }
            SimEvent::DroppedOff { elevator, count, .. } => {
                write!(f, "[Elevator {elevator}] {count} passenger(s) disembark.")
            }
            SimEvent::PickedUp { elevator, count, .. } => {
                write!(f, "[Elevator {elevator}] Picked up {count} passenger(s).")
            }
        }
    }
}

// ── EventSink ─────────────────────────────────────────────────────────────────

/// Receives every event the engine produces, in emission order.
pub trait EventSink {
    fn emit(&mut self, event: SimEvent);
}

/// An [`EventSink`] that discards everything.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&mut self, _event: SimEvent) {}
}

/// An [`EventSink`] that forwards each event line to the `log` facade at
/// `info` level.
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: SimEvent) {
        log::info!("{event}");
    }
}

/// Recording sink, mostly for tests.
impl EventSink for Vec<SimEvent> {
    fn emit(&mut self, event: SimEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: SimEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: SimEvent) {
        (**self).emit(event);
    }
}
