use std::cell::RefCell;
use std::rc::Rc;

use crate::interface_adapter::port::GreetingPort;

/// Last greeting shown in the terminal status bar.
#[derive(Debug, Clone, Default)]
pub struct Console {
    last: Rc<RefCell<Option<String>>>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.last.borrow().clone()
    }

    fn set(&self, message: &str) {
        *self.last.borrow_mut() = Some(message.to_string());
    }
}

/// Greets into a `Console` the terminal UI draws from.
pub struct ConsoleGreeter {
    console: Console,
}

impl ConsoleGreeter {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl GreetingPort for ConsoleGreeter {
    fn greet(&self, message: &str) {
        self.console.set(message);
    }
}
