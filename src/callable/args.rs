/// A method on receivers of type `R` that takes the argument list `A`. `A` is a tuple, so a
/// method `fn moved(&self, x: f64, y: f64)` is a `Method<Self, (f64, f64)>`. Implemented for
/// every `Fn(&R, ..)` of up to ten arguments.
pub trait Method<R, A>: 'static {
    fn call(&self, receiver: &R, args: A);
}

/// A function that takes the argument list `A` and is not bound to any receiver. Implemented for
/// every `Fn(..)` of up to ten arguments.
pub trait Function<A>: 'static {
    fn call(&self, args: A);
}

macro_rules! impl_callables {
    ($($arg:ident: $t:ident),*) => {
        impl<R, F, $($t),*> Method<R, ($($t,)*)> for F
        where
            F: Fn(&R, $($t),*) + 'static,
        {
            #[allow(clippy::unused_unit)]
            fn call(&self, receiver: &R, ($($arg,)*): ($($t,)*)) {
                self(receiver, $($arg),*)
            }
        }

        impl<F, $($t),*> Function<($($t,)*)> for F
        where
            F: Fn($($t),*) + 'static,
        {
            #[allow(clippy::unused_unit)]
            fn call(&self, ($($arg,)*): ($($t,)*)) {
                self($($arg),*)
            }
        }
    };
}

impl_callables!();
impl_callables!(a1: T1);
impl_callables!(a1: T1, a2: T2);
impl_callables!(a1: T1, a2: T2, a3: T3);
impl_callables!(a1: T1, a2: T2, a3: T3, a4: T4);
impl_callables!(a1: T1, a2: T2, a3: T3, a4: T4, a5: T5);
impl_callables!(a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6);
impl_callables!(a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7);
impl_callables!(a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7, a8: T8);
impl_callables!(a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7, a8: T8, a9: T9);
impl_callables!(a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7, a8: T8, a9: T9, a10: T10);
