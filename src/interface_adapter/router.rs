use crate::domain::primitive::Screen;
use crate::interface_adapter::port::SharedNavigator;
use crate::interface_adapter::presenter::{Presenter, PresenterFactory};
use crate::interface_adapter::view::Ui;
use crate::shared::error::AppError;

/// Registry mapping each screen to its ui and presenter.
///
/// Lookups walk registrations in insertion order and take the first match.
pub struct Router {
    uis: Vec<(Screen, Box<dyn Ui>)>,
    presenter_factories: Vec<Box<dyn PresenterFactory>>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    pub fn presenter(
        &self,
        screen: Screen,
        navigator: &SharedNavigator,
    ) -> Result<Box<dyn Presenter>, AppError> {
        self.presenter_factories
            .iter()
            .find_map(|factory| factory.create(screen, navigator))
            .ok_or(AppError::NoPresenter(screen))
    }

    pub fn ui(&self, screen: Screen) -> Result<&dyn Ui, AppError> {
        self.uis
            .iter()
            .find(|(registered, _)| *registered == screen)
            .map(|(_, ui)| ui.as_ref())
            .ok_or(AppError::NoUi(screen))
    }
}

#[derive(Default)]
pub struct RouterBuilder {
    uis: Vec<(Screen, Box<dyn Ui>)>,
    presenter_factories: Vec<Box<dyn PresenterFactory>>,
}

impl RouterBuilder {
    pub fn add_ui(mut self, screen: Screen, ui: impl Ui + 'static) -> Self {
        self.uis.push((screen, Box::new(ui)));
        self
    }

    pub fn add_presenter_factory(mut self, factory: impl PresenterFactory + 'static) -> Self {
        self.presenter_factories.push(Box::new(factory));
        self
    }

    pub fn build(self) -> Router {
        Router {
            uis: self.uis,
            presenter_factories: self.presenter_factories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_adapter::navigation::StackNavigator;
    use crate::interface_adapter::presenter::FooPresenterFactory;
    use crate::interface_adapter::screen::{EventSink, FooState, UiState};
    use crate::interface_adapter::view::ScreenView;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Claims every screen and always presents a Foo state.
    struct CatchAllFactory;

    impl PresenterFactory for CatchAllFactory {
        fn create(
            &self,
            _screen: Screen,
            _navigator: &SharedNavigator,
        ) -> Option<Box<dyn Presenter>> {
            Some(Box::new(CatchAllPresenter))
        }
    }

    struct CatchAllPresenter;

    impl Presenter for CatchAllPresenter {
        fn present(&self) -> UiState {
            UiState::Foo(FooState {
                event_sink: EventSink::new(|_| {}),
            })
        }
    }

    fn titled(title: &'static str) -> impl Fn(&UiState) -> Option<ScreenView> {
        move |_: &UiState| {
            Some(ScreenView {
                title: title.to_string(),
                buttons: Vec::new(),
            })
        }
    }

    fn navigator() -> SharedNavigator {
        Rc::new(RefCell::new(StackNavigator::new(Screen::Foo)))
    }

    #[test]
    fn empty_router_reports_missing_presenter() {
        let router = Router::builder().build();

        let result = router.presenter(Screen::Foo, &navigator());

        assert!(matches!(result, Err(AppError::NoPresenter(Screen::Foo))));
    }

    #[test]
    fn empty_router_reports_missing_ui() {
        let router = Router::builder().build();

        assert!(matches!(router.ui(Screen::Bar), Err(AppError::NoUi(Screen::Bar))));
    }

    #[test]
    fn factories_that_decline_are_skipped() {
        let router = Router::builder()
            .add_presenter_factory(FooPresenterFactory)
            .build();

        assert!(router.presenter(Screen::Foo, &navigator()).is_ok());
        assert!(matches!(
            router.presenter(Screen::Bar, &navigator()),
            Err(AppError::NoPresenter(Screen::Bar))
        ));
    }

    #[test]
    fn first_registered_factory_wins() {
        let router = Router::builder()
            .add_presenter_factory(CatchAllFactory)
            .add_presenter_factory(FooPresenterFactory)
            .build();

        // CatchAllFactory claims Bar too, and it was registered first.
        let presenter = router.presenter(Screen::Bar, &navigator()).unwrap();

        assert_eq!(presenter.present().screen(), Screen::Foo);
    }

    #[test]
    fn ui_lookup_matches_screen_and_prefers_first_registration() {
        let router = Router::builder()
            .add_ui(Screen::Foo, titled("first"))
            .add_ui(Screen::Bar, titled("bar"))
            .add_ui(Screen::Foo, titled("second"))
            .build();
        let state = CatchAllPresenter.present();

        let foo = router.ui(Screen::Foo).unwrap().content(&state).unwrap();
        let bar = router.ui(Screen::Bar).unwrap().content(&state).unwrap();

        assert_eq!(foo.title, "first");
        assert_eq!(bar.title, "bar");
    }
}
