//! View state machine.
//!
//! The whole single-page flow is modelled as one `AppState` value mutated
//! only through [`reduce`]. Rendering layers read the state; they never
//! mutate it directly.
//!
//! # Module Structure
//!
//! - `model`: `View`, `AppState` and the transient new-entry draft
//! - `action`: `Action` inputs and `Effect` outputs of the reducer
//! - `reducer`: The transition function

mod action;
mod model;
mod reducer;

pub use action::{Action, Effect, NavTarget};
pub use model::{AppState, Draft, NewEntryPhase, PendingGeneration, View};
pub use reducer::reduce;
