/*!
 * Guard Macros
 *
 * Arm a guard and pin it to the enclosing block. The pinned guard lives in a
 * hidden local, so it is torn down exactly when the block ends and cannot be
 * moved elsewhere.
 */

/// Run an action on every exit from the enclosing block
///
/// Optional trailing expressions are bound as arguments. The `let name =`
/// form exposes the pinned guard so it can be disarmed.
///
/// ```
/// use scope_exit::scope_exit;
/// use std::cell::Cell;
///
/// let closed = Cell::new(0);
/// {
///     scope_exit!(|c: &Cell<u32>| c.set(c.get() + 1), &closed);
///     scope_exit!(let keep = || closed.set(100));
///     keep.disarm().unwrap();
/// }
/// assert_eq!(closed.get(), 1);
/// ```
#[macro_export]
macro_rules! scope_exit {
    (let $name:ident = $func:expr $(, $arg:expr)* $(,)?) => {
        let $name = $crate::__pinned_guard!($crate::Always, $func $(, $arg)*);
    };
    ($func:expr $(, $arg:expr)* $(,)?) => {
        let _scope_exit = $crate::__pinned_guard!($crate::Always, $func $(, $arg)*);
    };
}

/// Run an action only if the enclosing block is left by a new panic
///
/// ```
/// use scope_exit::scope_failure;
/// use std::cell::Cell;
/// use std::panic;
///
/// let rolled_back = Cell::new(false);
/// let _ = panic::catch_unwind(panic::AssertUnwindSafe(|| {
///     scope_failure!(|| rolled_back.set(true));
///     panic!("insert failed");
/// }));
/// assert!(rolled_back.get());
/// ```
#[macro_export]
macro_rules! scope_failure {
    (let $name:ident = $func:expr $(, $arg:expr)* $(,)?) => {
        let $name = $crate::__pinned_guard!($crate::OnFailure::new(), $func $(, $arg)*);
    };
    ($func:expr $(, $arg:expr)* $(,)?) => {
        let _scope_failure = $crate::__pinned_guard!($crate::OnFailure::new(), $func $(, $arg)*);
    };
}

/// Run an action only if the enclosing block completes without a new panic
///
/// ```
/// use scope_exit::scope_success;
/// use std::cell::Cell;
///
/// let committed = Cell::new(false);
/// {
///     scope_success!(|| committed.set(true));
/// }
/// assert!(committed.get());
/// ```
#[macro_export]
macro_rules! scope_success {
    (let $name:ident = $func:expr $(, $arg:expr)* $(,)?) => {
        let $name = $crate::__pinned_guard!($crate::OnSuccess::new(), $func $(, $arg)*);
    };
    ($func:expr $(, $arg:expr)* $(,)?) => {
        let _scope_success = $crate::__pinned_guard!($crate::OnSuccess::new(), $func $(, $arg)*);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __pinned_guard {
    ($policy:expr, $func:expr $(, $arg:expr)*) => {
        ::core::pin::pin!($crate::make_guard($policy, $func, ($($arg,)*)))
    };
}
