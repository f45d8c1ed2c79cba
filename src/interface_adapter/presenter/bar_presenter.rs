use std::rc::Rc;

use crate::domain::primitive::Screen;
use crate::interface_adapter::port::{GreetingPort, SharedNavigator};
use crate::interface_adapter::presenter::{Presenter, PresenterFactory};
use crate::interface_adapter::screen::{BarEvent, BarState, EventSink, UiState};
use crate::usecase::HelloUsecase;

pub struct BarPresenter<G: GreetingPort> {
    navigator: SharedNavigator,
    hello: Rc<HelloUsecase<G>>,
}

impl<G: GreetingPort> BarPresenter<G> {
    pub fn new(navigator: SharedNavigator, hello: Rc<HelloUsecase<G>>) -> Self {
        Self { navigator, hello }
    }
}

impl<G: GreetingPort + 'static> Presenter for BarPresenter<G> {
    fn present(&self) -> UiState {
        let navigator = Rc::clone(&self.navigator);
        let hello = Rc::clone(&self.hello);
        UiState::Bar(BarState {
            event_sink: EventSink::new(move |event| match event {
                BarEvent::HelloButtonClicked => hello.invoke(),
                BarEvent::NavigateBackButtonClicked => {
                    navigator.borrow_mut().pop();
                }
            }),
        })
    }
}

pub struct BarPresenterFactory<G: GreetingPort> {
    hello: Rc<HelloUsecase<G>>,
}

impl<G: GreetingPort> BarPresenterFactory<G> {
    pub fn new(hello: Rc<HelloUsecase<G>>) -> Self {
        Self { hello }
    }
}

impl<G: GreetingPort + 'static> PresenterFactory for BarPresenterFactory<G> {
    fn create(&self, screen: Screen, navigator: &SharedNavigator) -> Option<Box<dyn Presenter>> {
        match screen {
            Screen::Bar => Some(Box::new(BarPresenter::new(
                Rc::clone(navigator),
                Rc::clone(&self.hello),
            ))),
            _ => None,
        }
    }
}
