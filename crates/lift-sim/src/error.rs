use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("initial floors length {got} does not match elevator count {expected}")]
    InitialFloorMismatch {
        expected: usize,
        got:      usize,
    },

    #[error(transparent)]
    Lift(#[from] LiftError),
}

pub type SimResult<T> = Result<T, SimError>;
