use super::*;

#[derive(Clone)]
enum WeakInner {
    Local(rc::Weak<dyn Any>),
    Shared(sync::Weak<dyn Any>),
}

/// A type erased weak reference to a handler's receiver. Can come from an `Rc` or an `Arc`.
#[derive(Clone)]
pub struct WeakReceiver(WeakInner);

impl WeakReceiver {
    pub(super) fn upgrade(&self) -> Option<StrongReceiver> {
        match &self.0 {
            WeakInner::Local(weak) => weak.upgrade().map(StrongReceiver::Local),
            WeakInner::Shared(weak) => weak.upgrade().map(StrongReceiver::Shared),
        }
    }

    /// Receiver identity. Stays valid after the receiver is dropped, because the weak keeps the
    /// allocation around.
    pub(super) fn thin_ptr(&self) -> *const () {
        match &self.0 {
            WeakInner::Local(weak) => weak.thin_ptr(),
            WeakInner::Shared(weak) => weak.thin_ptr(),
        }
    }
}

/// A receiver kept alive for the duration of a single invocation
pub(super) enum StrongReceiver {
    Local(Rc<dyn Any>),
    Shared(Arc<dyn Any>),
}

impl StrongReceiver {
    pub fn as_any(&self) -> &dyn Any {
        match self {
            Self::Local(rc) => &**rc,
            Self::Shared(arc) => &**arc,
        }
    }
}

/// Anything a handler's receiver can be given as. Handlers only ever keep the weak form.
pub trait ReceiverRef<R> {
    fn weak_receiver(&self) -> WeakReceiver;
}

impl<R: Any> ReceiverRef<R> for Rc<R> {
    fn weak_receiver(&self) -> WeakReceiver {
        WeakReceiver(WeakInner::Local(Rc::downgrade(self) as rc::Weak<dyn Any>))
    }
}

impl<R: Any> ReceiverRef<R> for rc::Weak<R> {
    fn weak_receiver(&self) -> WeakReceiver {
        WeakReceiver(WeakInner::Local(self.clone() as rc::Weak<dyn Any>))
    }
}

impl<R: Any> ReceiverRef<R> for Arc<R> {
    fn weak_receiver(&self) -> WeakReceiver {
        WeakReceiver(WeakInner::Shared(Arc::downgrade(self) as sync::Weak<dyn Any>))
    }
}

impl<R: Any> ReceiverRef<R> for sync::Weak<R> {
    fn weak_receiver(&self) -> WeakReceiver {
        WeakReceiver(WeakInner::Shared(self.clone() as sync::Weak<dyn Any>))
    }
}
