use super::*;

#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""))]
pub(super) enum Target<A> {
    Bound {
        receiver: WeakReceiver,
        method: Rc<dyn ErasedMethod<A>>,
    },
    Static(Rc<dyn ErasedFunction<A>>),
}

impl<A> Target<A> {
    /// Structural equality: same receiver object and same method, or same static function
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Bound { receiver, method },
                Self::Bound {
                    receiver: other_receiver,
                    method: other_method,
                },
            ) => receiver.thin_ptr() == other_receiver.thin_ptr() && method.id() == other_method.id(),
            (Self::Static(function), Self::Static(other_function)) => {
                function.id() == other_function.id()
            }
            _ => false,
        }
    }

    pub fn is_stateless(&self) -> bool {
        match self {
            Self::Bound { method, .. } => method.is_stateless(),
            Self::Static(function) => function.is_stateless(),
        }
    }

    pub fn callable_name(&self) -> &'static str {
        match self {
            Self::Bound { method, .. } => method.method_name(),
            Self::Static(function) => function.function_name(),
        }
    }
}

impl<A> std::fmt::Debug for Target<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bound { receiver, method } => write!(
                f,
                "{} on {}@{:?}",
                method.method_name(),
                method.receiver_name(),
                receiver.thin_ptr()
            ),
            Self::Static(function) => write!(f, "static {}", function.function_name()),
        }
    }
}

/// Names a handler for subscribing or unsubscribing: a receiver and one of its methods, or a
/// function with no receiver. The receiver is only referenced weakly, so holding on to a
/// `Handler` (to unsubscribe later, for example) does not keep the receiver alive.
///
/// ```
/// # use std::{cell::Cell, rc::Rc};
/// # use weak_events::{Broadcaster, Handler};
/// struct Counter(Cell<i32>);
///
/// impl Counter {
///     fn add(&self, amount: i32) {
///         self.0.set(self.0.get() + amount);
///     }
/// }
///
/// let counter = Rc::new(Counter(Cell::new(0)));
/// let changed = Broadcaster::<(i32,)>::new();
/// changed.subscribe(Handler::method(&counter, Counter::add)).unwrap();
/// changed.raise((5,));
/// assert_eq!(counter.0.get(), 5);
/// ```
#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct Handler<A> {
    pub(super) target: Target<A>,
}

impl<A> Handler<A> {
    /// A method bound to a receiver. The receiver can be given as an `Rc`, `Arc`, or a weak
    /// reference to either.
    pub fn method<R, P, F>(receiver: &P, method: F) -> Self
    where
        R: Any,
        P: ReceiverRef<R>,
        F: Method<R, A>,
    {
        Self {
            target: Target::Bound {
                receiver: receiver.weak_receiver(),
                method: Rc::new(BoundMethod::<R, F>::new(method)),
            },
        }
    }

    /// A method bound to a receiver that is dead as soon as it is destroyed, whether or not a
    /// probe is registered for its type
    pub fn host_method<R, P, F>(receiver: &P, method: F) -> Self
    where
        R: Destroyable + Any,
        P: ReceiverRef<R>,
        F: Method<R, A>,
    {
        Self::method_with_probe(receiver, method, NotDestroyed)
    }

    /// A method bound to a receiver, with its own liveness probe instead of the one registered
    /// for `R`
    pub fn method_with_probe<R, P, F, L>(receiver: &P, method: F, probe: L) -> Self
    where
        R: Any,
        P: ReceiverRef<R>,
        F: Method<R, A>,
        L: LivenessProbe<R> + 'static,
    {
        Self {
            target: Target::Bound {
                receiver: receiver.weak_receiver(),
                method: Rc::new(BoundMethod::<R, F>::with_probe(method, Rc::new(probe))),
            },
        }
    }

    /// A function that does not need a receiver. Always alive.
    pub fn function<F>(function: F) -> Self
    where
        F: Function<A>,
    {
        Self {
            target: Target::Static(Rc::new(StaticFunction(function))),
        }
    }

    /// If this names a receiver that is already gone. Such a handler can not be subscribed, and
    /// unsubscribing it does nothing.
    pub fn is_null(&self) -> bool {
        match &self.target {
            Target::Bound { receiver, .. } => receiver.upgrade().is_none(),
            Target::Static(_) => false,
        }
    }

    /// If both handlers name the same receiver and method (or the same function)
    pub fn same_as(&self, other: &Self) -> bool {
        self.target.same_as(&other.target)
    }
}
