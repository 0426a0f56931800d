/*!
 * Deferred Actions
 *
 * A callable bundled with its bound arguments, invoked at most once
 */

use super::traits::Invoke;
use std::fmt;

/// Callable plus bound argument tuple
///
/// Arguments are stored as given: values are moved in, references stay
/// references. A bound `&Cell<T>` or `&mut T` therefore reads the caller's
/// state at invocation time, not a copy taken at construction.
///
/// `invoke` consumes the action, so it can run at most once. There is no
/// `Clone` or `Copy`.
pub struct Action<F, A = ()> {
    func: F,
    args: A,
}

impl<F, A> Action<F, A>
where
    F: Invoke<A>,
{
    /// Bind `func` to `args`
    #[inline]
    pub fn new(func: F, args: A) -> Self {
        Self { func, args }
    }

    /// Apply the bound arguments to the callable
    ///
    /// Panics raised by the callable propagate to the caller unchanged.
    #[inline]
    pub fn invoke(self) -> F::Output {
        self.func.invoke(self.args)
    }
}

impl<F, A> fmt::Debug for Action<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("func", &std::any::type_name::<F>())
            .field("args", &std::any::type_name::<A>())
            .finish()
    }
}

/// Implement `Invoke<(A0, .., An)>` for every `FnOnce(A0, .., An) -> R`
macro_rules! impl_invoke {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> Invoke<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Out,
        {
            type Output = Out;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(self, ($($arg,)*): ($($arg,)*)) -> Out {
                self($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A0);
impl_invoke!(A0, A1);
impl_invoke!(A0, A1, A2);
impl_invoke!(A0, A1, A2, A3);
impl_invoke!(A0, A1, A2, A3, A4);
impl_invoke!(A0, A1, A2, A3, A4, A5);
impl_invoke!(A0, A1, A2, A3, A4, A5, A6);
impl_invoke!(A0, A1, A2, A3, A4, A5, A6, A7);
