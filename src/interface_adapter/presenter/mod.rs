pub mod bar_presenter;
pub mod foo_presenter;

pub use bar_presenter::BarPresenterFactory;
pub use foo_presenter::FooPresenterFactory;

use crate::domain::primitive::Screen;
use crate::interface_adapter::port::SharedNavigator;
use crate::interface_adapter::screen::UiState;

/// Produces the current render state of one screen.
///
/// Called on every composition pass; each call returns a fresh state.
pub trait Presenter {
    fn present(&self) -> UiState;
}

/// Builds a presenter for the screens it owns.
pub trait PresenterFactory {
    /// Returns `None` when `screen` does not belong to this factory.
    fn create(&self, screen: Screen, navigator: &SharedNavigator) -> Option<Box<dyn Presenter>>;
}
