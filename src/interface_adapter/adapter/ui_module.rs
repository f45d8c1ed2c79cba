use std::rc::Rc;

use crate::domain::primitive::Screen;
use crate::interface_adapter::adapter::domain_module::DomainModule;
use crate::interface_adapter::port::GreetingPort;
use crate::interface_adapter::presenter::{BarPresenterFactory, FooPresenterFactory};
use crate::interface_adapter::router::Router;
use crate::interface_adapter::screen::UiState;
use crate::interface_adapter::view::{ScreenView, bar_view, foo_view};

/// Build the router: one ui and one presenter factory per screen.
pub fn ui_module<G: GreetingPort + 'static>(domain: &DomainModule<G>) -> Router {
    Router::builder()
        .add_ui(Screen::Foo, foo_ui)
        .add_presenter_factory(FooPresenterFactory)
        .add_ui(Screen::Bar, bar_ui)
        .add_presenter_factory(BarPresenterFactory::new(Rc::clone(&domain.hello_usecase)))
        .build()
}

fn foo_ui(state: &UiState) -> Option<ScreenView> {
    match state {
        UiState::Foo(state) => Some(foo_view::foo(state)),
        _ => None,
    }
}

fn bar_ui(state: &UiState) -> Option<ScreenView> {
    match state {
        UiState::Bar(state) => Some(bar_view::bar(state)),
        _ => None,
    }
}
