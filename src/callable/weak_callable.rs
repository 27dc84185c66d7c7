use super::*;

/// A handler whose receiver is held weakly, checked on construction so that it can always be
/// matched again by `same_as()` later.
///
/// Death is latched: once the receiver is found dropped or destroyed, the callable stays dead
/// even if a badly behaved liveness probe changes its mind.
pub struct WeakCallable<A> {
    target: Target<A>,
    dead: Cell<bool>,
}

impl<A> WeakCallable<A> {
    /// Fails with `InvalidCallable` if the receiver is already gone, and with
    /// `UnsupportedCallableShape` if the callable carries state (such as a capturing closure).
    pub fn new(handler: Handler<A>) -> WeakResult<Self> {
        let target = handler.target;
        if let Target::Bound { receiver, method } = &target {
            if receiver.upgrade().is_none() {
                return Err(WeakEventError::InvalidCallable(
                    method.receiver_name().to_string(),
                ));
            }
        }
        if !target.is_stateless() {
            return Err(WeakEventError::UnsupportedCallableShape(
                target.callable_name().to_string(),
            ));
        }
        Ok(Self {
            target,
            dead: Cell::new(false),
        })
    }

    /// Static functions are always alive. Methods are alive while the receiver has not been
    /// dropped and its liveness probe does not report it destroyed.
    pub fn is_alive(&self) -> bool {
        self.resolve().is_some()
    }

    /// Returns something that can be invoked, or None if the receiver is dead. The returned value
    /// keeps the receiver alive until it is dropped.
    pub fn resolve(&self) -> Option<LiveCallable<A>> {
        if self.dead.get() {
            return None;
        }
        let live = match &self.target {
            Target::Static(function) => Some(LiveCallable(Live::Static(function.clone()))),
            Target::Bound { receiver, method } => receiver
                .upgrade()
                .filter(|receiver| method.is_alive(receiver.as_any()))
                .map(|receiver| {
                    LiveCallable(Live::Bound {
                        receiver,
                        method: method.clone(),
                    })
                }),
        };
        if live.is_none() {
            self.dead.set(true);
        }
        live
    }

    /// Invokes the callable if it is alive. Returns if it was invoked.
    pub fn invoke(&self, args: A) -> bool {
        match self.resolve() {
            Some(live) => {
                live.invoke(args);
                true
            }
            None => false,
        }
    }

    /// If this is the subscription the handler names (same receiver and method)
    pub fn matches(&self, handler: &Handler<A>) -> bool {
        self.target.same_as(&handler.target)
    }
}

impl<A> std::fmt::Debug for WeakCallable<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WeakCallable({:?})", self.target)
    }
}

enum Live<A> {
    Bound {
        receiver: StrongReceiver,
        method: Rc<dyn ErasedMethod<A>>,
    },
    Static(Rc<dyn ErasedFunction<A>>),
}

/// A resolved `WeakCallable`. Holds a strong reference to the receiver while it exists.
pub struct LiveCallable<A>(Live<A>);

impl<A> LiveCallable<A> {
    pub fn invoke(&self, args: A) {
        match &self.0 {
            Live::Bound { receiver, method } => method.call(receiver.as_any(), args),
            Live::Static(function) => function.call(args),
        }
    }
}
