/// Decides if a receiver that is still reachable should be treated as alive. Must not have side
/// effects, and must never report an object alive again after reporting it dead. Must not
/// subscribe to or unsubscribe from anything.
pub trait LivenessProbe<R: ?Sized> {
    fn is_alive(&self, receiver: &R) -> bool;
}

impl<R: ?Sized, F> LivenessProbe<R> for F
where
    F: Fn(&R) -> bool,
{
    fn is_alive(&self, receiver: &R) -> bool {
        self(receiver)
    }
}

/// The default probe: a receiver that can still be reached is alive
pub struct Reachable;

impl<R: ?Sized> LivenessProbe<R> for Reachable {
    fn is_alive(&self, _: &R) -> bool {
        true
    }
}
