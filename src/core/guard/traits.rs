/*!
 * Guard Traits
 *
 * Core abstractions for deferred actions and their invocation policies
 */

/// A callable that can be applied to a bound argument tuple exactly once
///
/// Implemented for every `FnOnce` of up to
/// [`MAX_BOUND_ARGS`](crate::core::limits::MAX_BOUND_ARGS) parameters, with
/// `Args` the tuple of parameter types (`()` for none). Requiring this bound
/// at construction means a callable that cannot accept its arguments is a
/// compile error, not a runtime fault.
///
/// # Type Inference
///
/// The bound does not tell the compiler a closure's parameter types, so
/// closures taking bound arguments need annotations:
///
/// ```
/// use scope_exit::{make_guard, Always};
/// use std::cell::Cell;
///
/// let hits = Cell::new(0);
/// {
///     let _guard = make_guard(Always, |c: &Cell<i32>, n: i32| c.set(c.get() + n), (&hits, 2));
/// }
/// assert_eq!(hits.get(), 2);
/// ```
pub trait Invoke<Args> {
    /// Whatever the callable returns
    type Output;

    /// Apply `args` positionally, consuming the callable
    fn invoke(self, args: Args) -> Self::Output;
}

/// Decides at teardown whether a guard's action runs
///
/// `arm` is called once when the guard is constructed and its snapshot is
/// handed back to `should_invoke` once when the guard is dropped.
pub trait Policy {
    /// Policy name for logging/debugging
    const NAME: &'static str;

    /// State captured at construction
    type Snapshot: Copy;

    /// Capture the construction-time snapshot
    fn arm(&self) -> Self::Snapshot;

    /// Decide, at teardown, whether the action runs
    fn should_invoke(&self, entry: Self::Snapshot) -> bool;
}
