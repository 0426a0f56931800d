/*!
 * Invocation Policies
 *
 * - **Always**: run on every scope exit
 * - **OnFailure**: run only if a new unwind started after arming
 * - **OnSuccess**: run only if no new unwind started after arming
 */

use super::traits::Policy;
use crate::core::unwind::{ThreadPanics, UnwindProbe};
use std::fmt;
use std::marker::PhantomData;

/// Unconditional policy (`defer` / `finally`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl Policy for Always {
    const NAME: &'static str = "always";
    type Snapshot = ();

    #[inline]
    fn arm(&self) {}

    #[inline]
    fn should_invoke(&self, _entry: ()) -> bool {
        true
    }
}

/// Rollback policy: fires iff the in-flight count grew since arming
///
/// An unwind that was already propagating when the guard was armed does not
/// count, only one that started afterwards.
///
/// With the default [`ThreadPanics`] probe a guard armed inside a
/// `catch_unwind` running during an outer unwind cannot see a new panic
/// (the reading stays at 1) and does not fire. See [`ThreadPanics`].
pub struct OnFailure<P = ThreadPanics>(PhantomData<P>);

impl OnFailure {
    /// Policy using the current thread's panic state
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P: UnwindProbe> OnFailure<P> {
    /// Policy reading the in-flight count from a custom probe
    #[inline]
    pub const fn with_probe() -> Self {
        Self(PhantomData)
    }
}

impl<P: UnwindProbe> Policy for OnFailure<P> {
    const NAME: &'static str = "on_failure";
    type Snapshot = usize;

    #[inline]
    fn arm(&self) -> usize {
        P::in_flight()
    }

    #[inline]
    fn should_invoke(&self, entry: usize) -> bool {
        P::in_flight() > entry
    }
}

/// Commit policy: fires iff the in-flight count is unchanged since arming
///
/// Same limitation as [`OnFailure`] with the default probe: a new panic
/// raised while an outer unwind is in flight leaves the reading unchanged,
/// so this policy still fires.
pub struct OnSuccess<P = ThreadPanics>(PhantomData<P>);

impl OnSuccess {
    /// Policy using the current thread's panic state
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P: UnwindProbe> OnSuccess<P> {
    /// Policy reading the in-flight count from a custom probe
    #[inline]
    pub const fn with_probe() -> Self {
        Self(PhantomData)
    }
}

impl<P: UnwindProbe> Policy for OnSuccess<P> {
    const NAME: &'static str = "on_success";
    type Snapshot = usize;

    #[inline]
    fn arm(&self) -> usize {
        P::in_flight()
    }

    #[inline]
    fn should_invoke(&self, entry: usize) -> bool {
        P::in_flight() == entry
    }
}

// Manual impls: derives would demand `P: Trait` of the probe marker

impl<P> Default for OnFailure<P> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<P> Default for OnSuccess<P> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<P> fmt::Debug for OnFailure<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnFailure")
    }
}

impl<P> fmt::Debug for OnSuccess<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnSuccess")
    }
}
