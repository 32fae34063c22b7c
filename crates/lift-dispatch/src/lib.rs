//! `lift-dispatch`: who answers a call, and where demand comes from.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`policy`]     | `DispatchPolicy` trait, `NearestAvailable`, `NoDispatch`      |
//! | [`calls`]      | `FloorCall`, `CallSource` trait, `RandomCalls`, `ScriptedCalls`, `NoCalls`|
//! | [`passengers`] | `PassengerSource` trait, `RandomPassengers`                   |
//!
//! # Design notes
//!
//! Every source of randomness is a capability handed in at construction
//! (each random implementation owns its own `SimRng`), so the engine itself
//! is deterministic.  Tests substitute `NoCalls` / `ScriptedCalls` and a
//! closure `PassengerSource` to script a run exactly.
//!
//! Dispatch is one-shot: a call is offered to the policy once, when it is
//! generated.  If no car is eligible the passengers simply keep waiting at
//! the floor until some car happens to stop there.

pub mod calls;
pub mod passengers;
pub mod policy;


pub use calls::{CallSource, FloorCall, NoCalls, RandomCalls, ScriptedCalls};
pub use passengers::{PassengerSource, RandomPassengers};
pub use policy::{DispatchPolicy, NearestAvailable, NoDispatch, is_eligible};
