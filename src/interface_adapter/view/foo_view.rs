use crate::interface_adapter::screen::{FooEvent, FooState};
use crate::interface_adapter::view::{Button, ScreenView};

pub const TITLE: &str = "Foo screen";
pub const NAVIGATE_BAR_LABEL: &str = "Navigate to Bar screen";

pub fn foo(state: &FooState) -> ScreenView {
    let sink = state.event_sink.clone();
    ScreenView {
        title: TITLE.to_string(),
        buttons: vec![Button::new(NAVIGATE_BAR_LABEL, move || {
            sink.emit(FooEvent::NavigateBarButtonClicked)
        })],
    }
}
