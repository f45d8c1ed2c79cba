use crate::interface_adapter::screen::EventSink;

/// Render snapshot of the Foo screen.
#[derive(Debug, Clone)]
pub struct FooState {
    pub event_sink: EventSink<FooEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooEvent {
    NavigateBarButtonClicked,
}
