use super::*;

/// One subscription. `removed` is set when the entry leaves the list, so a raise that already
/// snapshotted it knows to skip it.
struct Entry<A> {
    callable: WeakCallable<A>,
    removed: Cell<bool>,
}

impl<A> Entry<A> {
    fn remove(&self) {
        self.removed.set(true);
    }
}

/// An ordered list of weakly held handlers. Dead handlers are dropped lazily, whenever the list is
/// raised or unsubscribed from.
///
/// Every method takes `&self` so handlers can subscribe, unsubscribe and raise on the list that is
/// invoking them. Not thread safe.
pub struct WeakCallableList<A> {
    entries: RefCell<Vec<Rc<Entry<A>>>>,
    /// Reused between raises to hold the snapshot of alive entries. Moved out while a raise is in
    /// progress, so a nested raise allocates its own.
    scratch: Cell<Vec<Rc<Entry<A>>>>,
    config: ListConfig,
}

impl<A> WeakCallableList<A> {
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    pub fn with_config(config: ListConfig) -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            scratch: Cell::new(Vec::new()),
            config,
        }
    }

    /// Adds a handler to the end of the list. Subscribing the same handler twice adds two entries.
    pub fn subscribe(&self, handler: Handler<A>) -> WeakResult<()> {
        let callable = WeakCallable::new(handler)?;
        trace!("subscribing {:?}", callable);
        self.entries.borrow_mut().push(Rc::new(Entry {
            callable,
            removed: Cell::new(false),
        }));
        Ok(())
    }

    /// Removes every entry that matches the handler, along with any entries that are dead. Not an
    /// error if nothing matches. Does nothing at all if the handler's receiver is already gone.
    pub fn unsubscribe(&self, handler: &Handler<A>) {
        if handler.is_null() {
            trace!("ignoring unsubscribe of null handler {:?}", handler);
            return;
        }
        let mut matched = 0;
        let mut pruned = 0;
        self.entries.borrow_mut().retain(|entry| {
            if entry.callable.matches(handler) {
                matched += 1;
            } else if entry.callable.is_alive() {
                return true;
            } else {
                pruned += 1;
            }
            entry.remove();
            false
        });
        trace!("unsubscribed {} entries matching {:?}", matched, handler);
        self.log_pruned(pruned);
    }

    /// Invokes every alive handler in subscribe order.
    ///
    /// Dead handlers are pruned before any handler runs. Handlers subscribed during the raise are
    /// first invoked by the next raise. Handlers unsubscribed during the raise are skipped if they
    /// have not been invoked yet. A panicking handler is not caught, and the handlers after it are
    /// not invoked.
    pub fn raise(&self, args: A)
    where
        A: Clone,
    {
        let mut scratch = self.scratch.take();
        scratch.clear();
        let mut pruned = 0;
        self.entries.borrow_mut().retain(|entry| {
            if entry.callable.is_alive() {
                scratch.push(entry.clone());
                true
            } else {
                entry.remove();
                pruned += 1;
                false
            }
        });
        self.log_pruned(pruned);
        for entry in &scratch {
            if entry.removed.get() {
                continue;
            }
            // Only fails to resolve if an earlier handler killed this one's receiver
            if let Some(live) = entry.callable.resolve() {
                live.invoke(args.clone());
            }
        }
        scratch.clear();
        if scratch.capacity() > self.config.scratch_shrink_threshold {
            scratch.shrink_to_fit();
        }
        self.scratch.set(scratch);
    }

    /// Drops dead entries without invoking anything. Returns how many were dropped.
    pub fn prune(&self) -> usize {
        let mut pruned = 0;
        self.entries.borrow_mut().retain(|entry| {
            let alive = entry.callable.is_alive();
            if !alive {
                entry.remove();
                pruned += 1;
            }
            alive
        });
        self.log_pruned(pruned);
        pruned
    }

    /// Removes every entry
    pub fn clear(&self) {
        for entry in self.entries.borrow_mut().drain(..) {
            entry.remove();
        }
    }

    /// Number of entries, including dead ones that have not been pruned yet
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn log_pruned(&self, pruned: usize) {
        if pruned > 0 && self.config.log_pruning {
            debug!("pruned {} dead handler(s)", pruned);
        }
    }
}

impl<A> Default for WeakCallableList<A> {
    fn default() -> Self {
        Self::new()
    }
}
