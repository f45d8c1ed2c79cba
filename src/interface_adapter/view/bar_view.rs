use crate::interface_adapter::screen::{BarEvent, BarState};
use crate::interface_adapter::view::{Button, ScreenView};

pub const TITLE: &str = "Bar screen";
pub const HELLO_LABEL: &str = "Hello, world!";
pub const NAVIGATE_BACK_LABEL: &str = "Navigate back";

pub fn bar(state: &BarState) -> ScreenView {
    let hello_sink = state.event_sink.clone();
    let back_sink = state.event_sink.clone();
    ScreenView {
        title: TITLE.to_string(),
        buttons: vec![
            Button::new(HELLO_LABEL, move || {
                hello_sink.emit(BarEvent::HelloButtonClicked)
            }),
            Button::new(NAVIGATE_BACK_LABEL, move || {
                back_sink.emit(BarEvent::NavigateBackButtonClicked)
            }),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_adapter::screen::EventSink;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_state() -> (BarState, Rc<RefCell<Vec<BarEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let state = BarState {
            event_sink: {
                let seen = Rc::clone(&seen);
                EventSink::new(move |e| seen.borrow_mut().push(e))
            },
        };
        (state, seen)
    }

    #[test]
    fn shows_title_and_two_buttons_in_order() {
        let (state, _) = recording_state();

        let view = bar(&state);

        assert_eq!(view.title, "Bar screen");
        let labels: Vec<&str> = view.buttons.iter().map(Button::label).collect();
        assert_eq!(labels, vec!["Hello, world!", "Navigate back"]);
    }

    #[test]
    fn each_button_emits_its_own_event() {
        let (state, seen) = recording_state();
        let view = bar(&state);

        view.buttons[0].click();
        view.buttons[1].click();

        assert_eq!(
            *seen.borrow(),
            vec![BarEvent::HelloButtonClicked, BarEvent::NavigateBackButtonClicked]
        );
    }
}
