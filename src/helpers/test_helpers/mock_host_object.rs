use super::*;

/// A receiver that can be destroyed while still referenced
pub struct MockHostObject {
    destroyed: DestroyFlag,
    values: RefCell<Vec<i32>>,
}

impl MockHostObject {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            destroyed: DestroyFlag::new(),
            values: RefCell::new(Vec::new()),
        })
    }

    pub fn destroy(&self) {
        self.destroyed.destroy();
    }

    pub fn on_value(&self, value: i32) {
        self.values.borrow_mut().push(value);
    }

    pub fn values(&self) -> Vec<i32> {
        self.values.borrow().clone()
    }
}

impl Destroyable for MockHostObject {
    fn is_destroyed(&self) -> bool {
        self.destroyed.is_destroyed()
    }
}
