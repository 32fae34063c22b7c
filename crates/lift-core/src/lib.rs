//! `lift-core`: foundational types for the `rust_lift` elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `log`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`                                          |
//! | [`floor`]       | `Floor`, `FloorRange`                                 |
//! | [`direction`]   | `Direction` (`Up`, `Down`, `Idle`)                    |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng`                                              |
//! | [`event`]       | `SimEvent`, `EventSink`, `NoopSink`, `LogSink`        |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod event;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use event::{EventSink, LogSink, NoopSink, SimEvent};
pub use floor::{Floor, FloorRange};
pub use ids::ElevatorId;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
