use super::*;

/// A weak reference to a host object that stops resolving as soon as the object is destroyed,
/// not only once it is dropped.
#[derive(Debug)]
pub struct HostWeak<T> {
    target: rc::Weak<T>,
}

impl<T: Destroyable> HostWeak<T> {
    pub fn new(target: &Rc<T>) -> Self {
        Self {
            target: Rc::downgrade(target),
        }
    }

    /// A reference to nothing. Never alive.
    pub fn empty() -> Self {
        Self {
            target: rc::Weak::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.target().is_some()
    }

    /// The target if it has neither been dropped nor destroyed
    pub fn target(&self) -> Option<Rc<T>> {
        self.target
            .upgrade()
            .filter(|target| !target.is_destroyed())
    }

    pub fn set_target(&mut self, target: &Rc<T>) {
        self.target = Rc::downgrade(target);
    }
}

impl<T: Destroyable> Default for HostWeak<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Clone for HostWeak<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
        }
    }
}
