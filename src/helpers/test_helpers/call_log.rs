use super::*;

/// Shared record of calls across several receivers, for checking the order they happen in
#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: String) {
        self.0.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// Receiver that writes "name:value" to a shared log
pub struct NamedReceiver {
    name: &'static str,
    log: CallLog,
}

impl NamedReceiver {
    pub fn new(name: &'static str, log: &CallLog) -> Rc<Self> {
        Rc::new(Self {
            name,
            log: log.clone(),
        })
    }

    pub fn on_value(&self, value: i32) {
        self.log.push(format!("{}:{}", self.name, value));
    }
}
