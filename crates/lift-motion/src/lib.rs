//! `lift-motion`: advances one car by one tick.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`controller`] | `ElevatorController`: request intake and `step`          |
//! | [`outcome`]    | `StepOutcome`: what a step did                           |
//!
//! # State machine
//!
//! ```text
//! step(car):
//!   not busy                  → Idle: direction = Idle, nothing else
//!   current != front of queue → Moving: one floor towards the front
//!   current == front of queue → Stopped: drop off, pick up, dequeue floor
//!   then recompute direction from the (possibly new) front of the queue
//! ```
//!
//! A service stop completes inside a single tick.  A car therefore needs
//! `distance` moving ticks plus one service tick to handle a request.

pub mod controller;
pub mod outcome;


pub use controller::{ElevatorController, refresh_direction};
pub use outcome::StepOutcome;
