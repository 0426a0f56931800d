/*!
 * Scope Exit
 * Scope-bound deferred actions with always / on-failure / on-success policies
 *
 * A guard captures an action when it is armed and decides at scope exit
 * whether to run it:
 *
 * - `Always` runs it on every exit path (`defer` / `finally`)
 * - `OnFailure` runs it only if a panic started unwinding after arming
 * - `OnSuccess` runs it only if no new panic did
 *
 * ```
 * use scope_exit::{scope_exit, scope_failure, scope_success};
 * use std::cell::RefCell;
 *
 * fn transfer(log: &RefCell<Vec<&'static str>>, fail: bool) {
 *     scope_exit!(|| log.borrow_mut().push("unlock"));
 *     scope_failure!(|| log.borrow_mut().push("rollback"));
 *     scope_success!(|| log.borrow_mut().push("commit"));
 *     if fail {
 *         panic!("debit failed");
 *     }
 * }
 *
 * let log = RefCell::new(Vec::new());
 * transfer(&log, false);
 * assert_eq!(*log.borrow(), ["commit", "unlock"]);
 *
 * log.borrow_mut().clear();
 * let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| transfer(&log, true)));
 * assert_eq!(*log.borrow(), ["rollback", "unlock"]);
 * ```
 */

#[macro_use]
mod macros;

pub mod core;
pub mod monitoring;

// Re-exports
pub use crate::core::errors::{GuardError, GuardResult, TraceInitError};
pub use crate::core::guard::{
    defer, make_guard, on_failure, on_success, Action, Always, Guard, GuardState, Invoke,
    OnFailure, OnSuccess, Policy,
};
pub use crate::core::unwind::{errors_in_flight, ThreadPanics, UnwindProbe};
pub use monitoring::{init_tracing, init_tracing_with, TraceConfig};
