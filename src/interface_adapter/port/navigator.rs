use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::primitive::Screen;

/// Back-stack navigation port consumed by presenters.
pub trait Navigator {
    /// Push `screen`. Returns `false` when it is already the visible screen.
    fn go_to(&mut self, screen: Screen) -> bool;

    /// Pop the visible screen. Returns the removed screen, or `None` when
    /// only the root remains.
    fn pop(&mut self) -> Option<Screen>;

    /// The currently visible screen.
    fn peek(&self) -> Screen;
}

/// Navigator handle shared between the application root and presenters.
pub type SharedNavigator = Rc<RefCell<dyn Navigator>>;
