use std::rc::Rc;

use crate::domain::primitive::Screen;
use crate::interface_adapter::port::SharedNavigator;
use crate::interface_adapter::presenter::{Presenter, PresenterFactory};
use crate::interface_adapter::screen::{EventSink, FooEvent, FooState, UiState};

pub struct FooPresenter {
    navigator: SharedNavigator,
}

impl FooPresenter {
    pub fn new(navigator: SharedNavigator) -> Self {
        Self { navigator }
    }
}

impl Presenter for FooPresenter {
    fn present(&self) -> UiState {
        let navigator = Rc::clone(&self.navigator);
        UiState::Foo(FooState {
            event_sink: EventSink::new(move |event| match event {
                FooEvent::NavigateBarButtonClicked => {
                    navigator.borrow_mut().go_to(Screen::Bar);
                }
            }),
        })
    }
}

pub struct FooPresenterFactory;

impl PresenterFactory for FooPresenterFactory {
    fn create(&self, screen: Screen, navigator: &SharedNavigator) -> Option<Box<dyn Presenter>> {
        match screen {
            Screen::Foo => Some(Box::new(FooPresenter::new(Rc::clone(navigator)))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_adapter::navigation::StackNavigator;
    use crate::interface_adapter::port::Navigator;
    use std::cell::RefCell;

    fn navigator_at_foo() -> Rc<RefCell<StackNavigator>> {
        Rc::new(RefCell::new(StackNavigator::new(Screen::Foo)))
    }

    fn foo_state(presenter: &dyn Presenter) -> FooState {
        match presenter.present() {
            UiState::Foo(state) => state,
            other => panic!("expected Foo state, got {:?}", other.screen()),
        }
    }

    #[test]
    fn factory_creates_presenter_for_foo() {
        let navigator: SharedNavigator = navigator_at_foo();

        let presenter = FooPresenterFactory.create(Screen::Foo, &navigator);

        let presenter = presenter.expect("Foo presenter");
        assert_eq!(presenter.present().screen(), Screen::Foo);
    }

    #[test]
    fn factory_declines_other_screens() {
        let navigator: SharedNavigator = navigator_at_foo();

        assert!(FooPresenterFactory.create(Screen::Bar, &navigator).is_none());
    }

    #[test]
    fn navigate_bar_event_pushes_bar() {
        let navigator = navigator_at_foo();
        let presenter = FooPresenter::new(navigator.clone());

        foo_state(&presenter)
            .event_sink
            .emit(FooEvent::NavigateBarButtonClicked);

        let navigator = navigator.borrow();
        assert_eq!(navigator.peek(), Screen::Bar);
        assert_eq!(navigator.back_stack().depth(), 2);
    }

    #[test]
    fn present_returns_fresh_state_each_time() {
        let navigator = navigator_at_foo();
        let presenter = FooPresenter::new(navigator.clone());

        let first = foo_state(&presenter);
        let second = foo_state(&presenter);
        first.event_sink.emit(FooEvent::NavigateBarButtonClicked);
        // A stale state still routes to the same navigator; pushing Bar twice
        // in a row is ignored by the back-stack.
        second.event_sink.emit(FooEvent::NavigateBarButtonClicked);

        assert_eq!(navigator.borrow().back_stack().depth(), 2);
    }
}
