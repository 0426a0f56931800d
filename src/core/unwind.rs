/*!
 * Unwind Detection
 *
 * Per-thread "errors in flight" query consumed by the conditional guard
 * policies. Guards only ever compare two readings taken on the same thread,
 * so the absolute value is irrelevant; only the delta matters.
 */

/// Source of the per-thread count of in-flight (uncaught) unwinds
///
/// Implementations must be side-effect free and must report a strictly
/// larger value while a new unwind is propagating than before it started,
/// returning to the earlier value once that unwind is caught.
pub trait UnwindProbe {
    /// Current number of unwinds propagating through the calling thread
    fn in_flight() -> usize;
}

/// Probe backed by [`std::thread::panicking`]
///
/// Stable Rust exposes whether the thread is panicking, not how many panics
/// are in flight, so this probe saturates at 1. It is exact whenever the
/// guard is armed outside any unwind. It is NOT exact for a guard armed
/// inside a `catch_unwind` that itself runs during an outer unwind (e.g. in
/// a destructor): a new panic raised there leaves the reading at 1, so
/// `OnFailure` skips and `OnSuccess` fires as if nothing failed. Hosts that
/// track a real count can supply their own [`UnwindProbe`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreadPanics;

impl UnwindProbe for ThreadPanics {
    #[inline]
    fn in_flight() -> usize {
        std::thread::panicking() as usize
    }
}

/// Number of unwinds currently in flight on this thread
#[inline]
pub fn errors_in_flight() -> usize {
    ThreadPanics::in_flight()
}
