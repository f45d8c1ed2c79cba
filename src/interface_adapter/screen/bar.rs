use crate::interface_adapter::screen::EventSink;

/// Render snapshot of the Bar screen.
#[derive(Debug, Clone)]
pub struct BarState {
    pub event_sink: EventSink<BarEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEvent {
    HelloButtonClicked,
    NavigateBackButtonClicked,
}
