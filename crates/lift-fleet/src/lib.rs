//! `lift-fleet`: per-car state and per-floor waiting counts.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`elevator`]  | `Elevator`: floor, direction, destination queue, onboard    |
//! | [`fleet`]     | `Fleet`: every car, indexed by `ElevatorId`                 |
//! | [`registry`]  | `FloorRegistry`: passengers waiting at each floor           |
//!
//! Everything here is plain data plus small queries.  The rules that move
//! cars and load passengers live in `lift-motion`; the rule that chooses a
//! car for a call lives in `lift-dispatch`.

pub mod elevator;
pub mod fleet;
pub mod registry;


pub use elevator::Elevator;
pub use fleet::Fleet;
pub use registry::FloorRegistry;
