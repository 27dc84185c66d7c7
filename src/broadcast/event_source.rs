use super::*;

/// An event raised with a sender and an event argument, for handlers shaped like
/// `fn on_event(&self, sender: S, event: E)`.
#[derive(derivative::Derivative)]
#[derivative(Default(bound = ""))]
pub struct EventSource<S, E> {
    handlers: WeakCallableList<(S, E)>,
}

impl<S, E> EventSource<S, E> {
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

    pub fn subscribe(&self, handler: Handler<(S, E)>) -> WeakResult<()> {
        self.handlers.subscribe(handler)
    }

    pub fn unsubscribe(&self, handler: &Handler<(S, E)>) {
        self.handlers.unsubscribe(handler);
    }

    pub fn raise(&self, sender: S, event: E)
    where
        S: Clone,
        E: Clone,
    {
        self.handlers.raise((sender, event));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
