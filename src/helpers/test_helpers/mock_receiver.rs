use super::*;

/// Receiver that records what it was called with
pub struct MockReceiver {
    values: RefCell<Vec<i32>>,
    others: RefCell<Vec<i32>>,
    pings: Cell<u32>,
}

impl MockReceiver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            values: RefCell::new(Vec::new()),
            others: RefCell::new(Vec::new()),
            pings: Cell::new(0),
        })
    }

    pub fn on_value(&self, value: i32) {
        self.values.borrow_mut().push(value);
    }

    pub fn on_other(&self, value: i32) {
        self.others.borrow_mut().push(value);
    }

    pub fn on_ping(&self) {
        self.pings.set(self.pings.get() + 1);
    }

    pub fn values(&self) -> Vec<i32> {
        self.values.borrow().clone()
    }

    pub fn others(&self) -> Vec<i32> {
        self.others.borrow().clone()
    }

    pub fn ping_count(&self) -> u32 {
        self.pings.get()
    }

    pub fn clear(&self) {
        self.values.borrow_mut().clear();
        self.others.borrow_mut().clear();
        self.pings.set(0);
    }
}
