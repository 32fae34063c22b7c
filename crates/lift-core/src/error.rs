//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert `LiftError` into
//! them via `From` impls (see `lift-sim::SimError`).

use thiserror::Error;

use crate::{ElevatorId, Floor, FloorRange};

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("floor {floor} is outside the building ({range})")]
    FloorOutOfRange { floor: Floor, range: FloorRange },

    #[error("invalid destination floor {floor}: {reason}")]
    InvalidDestination { floor: Floor, reason: &'static str },

    #[error("elevator {0} not found")]
    ElevatorNotFound(ElevatorId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
