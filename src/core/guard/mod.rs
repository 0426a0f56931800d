/*!
 * Scope Guards
 *
 * Deferred actions bound to a lexical scope, fired on drop according to a
 * policy.
 *
 * ## Design Principles
 *
 * 1. **Invoke Once**: the action is consumed by its single invocation
 * 2. **Scope-Bound**: guards are `!Send`, `!Unpin` and pinned by the macros
 * 3. **Policy in the Type**: `Guard<Always, _>`, `Guard<OnFailure, _>` and
 *    `Guard<OnSuccess, _>` are distinct types
 * 4. **Checked at Compile Time**: a callable that cannot take its bound
 *    arguments never builds
 * 5. **Zero-Cost**: no allocation; `Always` stores no snapshot
 *
 * ## Policies
 *
 * - **Always**: cleanup on every exit path
 * - **OnFailure**: rollback when a panic started unwinding inside the scope
 * - **OnSuccess**: commit when the scope completed without a new panic
 *
 * ## Example
 *
 * ```rust
 * use scope_exit::{on_failure, on_success};
 * use std::cell::RefCell;
 *
 * let journal = RefCell::new(Vec::new());
 * {
 *     let _commit = on_success(|| journal.borrow_mut().push("commit"));
 *     let _rollback = on_failure(|| journal.borrow_mut().push("rollback"));
 *     journal.borrow_mut().push("write");
 * }
 * assert_eq!(*journal.borrow(), ["write", "commit"]);
 * ```
 */

mod action;
mod policy;
mod scope;
mod traits;

pub use action::Action;
pub use policy::{Always, OnFailure, OnSuccess};
pub use scope::{Guard, GuardState};
pub use traits::{Invoke, Policy};

pub use crate::core::errors::{GuardError, GuardResult};

/// Arm a guard under `policy` that runs `func(args..)` at scope exit
///
/// `args` is a tuple of bound arguments (`()` for none). Values are moved in;
/// references stay references and are read at invocation time.
#[inline]
pub fn make_guard<P, F, A>(policy: P, func: F, args: A) -> Guard<P, F, A>
where
    P: Policy,
    F: Invoke<A>,
{
    Guard::new(policy, func, args)
}

/// Run `func` on every exit from the current scope
#[inline]
pub fn defer<F>(func: F) -> Guard<Always, F>
where
    F: FnOnce(),
{
    Guard::new(Always, func, ())
}

/// Run `func` only if the scope is left by a panic raised after this call
#[inline]
pub fn on_failure<F>(func: F) -> Guard<OnFailure, F>
where
    F: FnOnce(),
{
    Guard::new(OnFailure::new(), func, ())
}

/// Run `func` only if the scope is left without a new panic
#[inline]
pub fn on_success<F>(func: F) -> Guard<OnSuccess, F>
where
    F: FnOnce(),
{
    Guard::new(OnSuccess::new(), func, ())
}
