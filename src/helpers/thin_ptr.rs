use std::{
    rc::{self, Rc},
    sync::{self, Arc},
};

/// Address of the pointed-to value with any vtable dropped, so pointers to the same object compare
/// equal no matter what trait object type they went through.
pub trait ThinPtr {
    fn thin_ptr(&self) -> *const ();
}

impl<T: ?Sized> ThinPtr for Rc<T> {
    fn thin_ptr(&self) -> *const () {
        Rc::as_ptr(self) as *const ()
    }
}

impl<T: ?Sized> ThinPtr for Arc<T> {
    fn thin_ptr(&self) -> *const () {
        Arc::as_ptr(self) as *const ()
    }
}

/// Does not upgrade, so it keeps working after the value is dropped. The weak keeps the allocation
/// so the address is not reused while the weak exists.
impl<T: ?Sized> ThinPtr for rc::Weak<T> {
    fn thin_ptr(&self) -> *const () {
        self.as_ptr() as *const ()
    }
}

impl<T: ?Sized> ThinPtr for sync::Weak<T> {
    fn thin_ptr(&self) -> *const () {
        self.as_ptr() as *const ()
    }
}
