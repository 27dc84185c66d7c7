use super::*;
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};

/// An object with an explicit destroy step that can happen before the last reference is dropped
pub trait Destroyable {
    fn is_destroyed(&self) -> bool;
}

/// Probe for `Destroyable` receivers: alive until destroyed
pub struct NotDestroyed;

impl<R: Destroyable + ?Sized> LivenessProbe<R> for NotDestroyed {
    fn is_alive(&self, receiver: &R) -> bool {
        !receiver.is_destroyed()
    }
}

/// A one-way destroyed latch that host objects can embed
#[derive(Debug, Default)]
pub struct DestroyFlag(AtomicBool);

impl DestroyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this call did the destroying, false if it was already destroyed
    pub fn destroy(&self) -> bool {
        !self.0.swap(true, SeqCst)
    }
}

impl Destroyable for DestroyFlag {
    fn is_destroyed(&self) -> bool {
        self.0.load(SeqCst)
    }
}
