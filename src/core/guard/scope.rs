/*!
 * Scope Guards
 *
 * RAII guard that runs its action on drop, subject to its policy
 */

use super::action::Action;
use super::traits::{Invoke, Policy};
use super::{GuardError, GuardResult};
use crate::core::unwind::errors_in_flight;
use std::cell::Cell;
use std::fmt;
use std::marker::{PhantomData, PhantomPinned};
use tracing::{debug, trace, trace_span};

/// Guard state observable before teardown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Action will be considered at scope exit
    Armed,
    /// Action will be dropped without running
    Disarmed,
}

/// What teardown did with the action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Teardown {
    Invoked,
    Skipped,
    Disarmed,
}

/// Scope-bound deferred action
///
/// Created armed. When dropped (normal exit, early return, `?`, or panic
/// unwinding) the policy decides whether the action runs; it runs at most
/// once. Siblings in the same block tear down in reverse declaration order.
///
/// The guard is `!Send`, `!Sync` and `!Unpin`, and never `Clone`/`Copy`.
/// The `scope_exit!` family of macros pins it to the enclosing block so it
/// cannot be moved out of the scope it guards.
///
/// # Example
///
/// ```
/// use scope_exit::{make_guard, OnFailure};
/// use std::cell::Cell;
/// use std::panic;
///
/// let undone = Cell::new(false);
/// let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
///     let _rollback = make_guard(OnFailure::new(), |u: &Cell<bool>| u.set(true), (&undone,));
///     panic!("step two failed");
/// }));
///
/// assert!(result.is_err());
/// assert!(undone.get());
/// ```
#[must_use = "a guard dropped immediately runs (or skips) its action right away"]
pub struct Guard<P, F, A = ()>
where
    P: Policy,
    F: Invoke<A>,
{
    action: Option<Action<F, A>>,
    policy: P,
    entry: P::Snapshot,
    state: Cell<GuardState>,
    // Tied to the creating thread's stack
    _thread: PhantomData<*const ()>,
    _pin: PhantomPinned,
}

impl<P, F, A> Guard<P, F, A>
where
    P: Policy,
    F: Invoke<A>,
{
    /// Arm a guard running `func(args..)` at scope exit under `policy`
    ///
    /// Conditional policies snapshot the in-flight unwind count here.
    pub fn new(policy: P, func: F, args: A) -> Self {
        let entry = policy.arm();
        trace!(policy = P::NAME, "guard armed");

        Self {
            action: Some(Action::new(func, args)),
            policy,
            entry,
            state: Cell::new(GuardState::Armed),
            _thread: PhantomData,
            _pin: PhantomPinned,
        }
    }

    /// Cancel the guard; the action will be dropped without running
    ///
    /// Returns `Err` if already disarmed.
    pub fn disarm(&self) -> GuardResult<()> {
        if self.state.get() == GuardState::Disarmed {
            return Err(GuardError::AlreadyDisarmed { policy: P::NAME });
        }

        self.state.set(GuardState::Disarmed);
        trace!(policy = P::NAME, "guard disarmed");
        Ok(())
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> GuardState {
        self.state.get()
    }

    /// Check if the guard is still armed
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.state.get() == GuardState::Armed
    }

    /// Policy name for logging/debugging
    #[inline]
    pub fn policy_name(&self) -> &'static str {
        P::NAME
    }

    fn teardown(&mut self) -> Teardown {
        let Some(action) = self.action.take() else {
            return Teardown::Skipped;
        };

        if self.state.get() == GuardState::Disarmed {
            return Teardown::Disarmed;
        }

        if !self.policy.should_invoke(self.entry) {
            return Teardown::Skipped;
        }

        // Host state, not the policy's counter: abort risk depends only on
        // whether this drop is itself part of an unwind
        if errors_in_flight() > 0 {
            debug!(policy = P::NAME, "invoking deferred action during unwind");
        }

        let _span = trace_span!("deferred_action", policy = P::NAME).entered();
        action.invoke();
        Teardown::Invoked
    }
}

impl<P, F, A> Drop for Guard<P, F, A>
where
    P: Policy,
    F: Invoke<A>,
{
    fn drop(&mut self) {
        let outcome = self.teardown();
        trace!(policy = P::NAME, ?outcome, "guard torn down");
    }
}

impl<P, F, A> fmt::Debug for Guard<P, F, A>
where
    P: Policy,
    F: Invoke<A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("policy", &P::NAME)
            .field("state", &self.state.get())
            .finish()
    }
}

static_assertions::assert_not_impl_any!(
    Guard<super::Always, fn()>: Clone, Copy, Send, Sync, Unpin
);
static_assertions::assert_not_impl_any!(
    Guard<super::OnFailure, fn(u8), (u8,)>: Clone, Copy, Send, Sync, Unpin
);
static_assertions::assert_not_impl_any!(Action<fn()>: Clone, Copy);
