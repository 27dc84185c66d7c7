use super::*;

/// A single weakly held callback, for when a whole broadcaster is more than is needed
pub struct WeakAction<A> {
    inner: WeakCallable<A>,
}

impl<A> WeakAction<A> {
    pub fn new(handler: Handler<A>) -> WeakResult<Self> {
        Ok(Self {
            inner: WeakCallable::new(handler)?,
        })
    }

    pub fn is_alive(&self) -> bool {
        self.inner.is_alive()
    }

    /// Invokes the callback if its receiver is alive, otherwise does nothing. Returns if it was
    /// invoked.
    pub fn invoke(&self, args: A) -> bool {
        self.inner.invoke(args)
    }
}
