/*!
 * Core Module
 * Guards, unwind detection and error handling
 */

pub mod errors;
pub mod guard;
pub mod limits;
pub mod unwind;

// Re-export for convenience
pub use errors::*;
pub use guard::{
    defer, make_guard, on_failure, on_success, Action, Always, Guard, GuardState, Invoke,
    OnFailure, OnSuccess, Policy,
};
pub use unwind::{errors_in_flight, ThreadPanics, UnwindProbe};
