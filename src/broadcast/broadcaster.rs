use super::*;

/// An event that any number of handlers can subscribe to without being kept alive by it.
/// `A` is the tuple of arguments the event is raised with, `()` for an event with none.
///
/// Handlers are invoked in the order they subscribed. See [`WeakCallableList::raise`] for what
/// happens when handlers change the subscriptions during a raise.
#[derive(derivative::Derivative)]
#[derivative(Default(bound = ""))]
pub struct Broadcaster<A> {
    handlers: WeakCallableList<A>,
}

impl<A> Broadcaster<A> {
    pub fn new() -> Self {
        Self {
            handlers: WeakCallableList::new(),
        }
    }

    pub fn with_config(config: ListConfig) -> Self {
        Self {
            handlers: WeakCallableList::with_config(config),
        }
    }

    pub fn subscribe(&self, handler: Handler<A>) -> WeakResult<()> {
        self.handlers.subscribe(handler)
    }

    pub fn unsubscribe(&self, handler: &Handler<A>) {
        self.handlers.unsubscribe(handler);
    }

    pub fn raise(&self, args: A)
    where
        A: Clone,
    {
        self.handlers.raise(args);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn prune(&self) -> usize {
        self.handlers.prune()
    }

    pub fn clear(&self) {
        self.handlers.clear();
    }
}

impl<A> std::fmt::Debug for Broadcaster<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Broadcaster<{}>({} handlers)", type_name::<A>(), self.len())
    }
}
