use std::fmt;
use std::rc::Rc;

/// Callback through which a view reports user events to its presenter.
pub struct EventSink<E> {
    handler: Rc<dyn Fn(E)>,
}

impl<E> EventSink<E> {
    pub fn new(handler: impl Fn(E) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }

    pub fn emit(&self, event: E) {
        (self.handler)(event);
    }
}

impl<E> Clone for EventSink<E> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<E> fmt::Debug for EventSink<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventSink(..)")
    }
}
