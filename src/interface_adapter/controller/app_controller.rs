use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Receiver;

use crate::domain::primitive::Screen;
use crate::interface_adapter::navigation::{NavigationChange, StackNavigator};
use crate::interface_adapter::port::{Navigator, SharedNavigator};
use crate::interface_adapter::presenter::Presenter;
use crate::interface_adapter::router::Router;
use crate::interface_adapter::view::ScreenView;
use crate::shared::error::AppError;

/// User actions (infrastructure-independent).
///
/// The platform layer converts its native input into `AppAction`s and
/// forwards them to `AppController::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    FocusNext,
    FocusPrev,
    Activate,
    ActivateIndex(usize),
    NavigateBack,
    Quit,
}

/// Presenter bound to the screen it was created for.
struct Mounted {
    screen: Screen,
    presenter: Box<dyn Presenter>,
}

/// Application root.
///
/// Owns the back-stack (rooted at the screen passed to `new`), keeps the
/// presenter of the visible screen mounted and recomposes its view on
/// demand. Navigation changes arrive through a subscription and are drained
/// after every dispatch.
pub struct AppController {
    router: Router,
    navigator: Rc<RefCell<StackNavigator>>,
    changes: Receiver<NavigationChange>,
    mounted: Option<Mounted>,
    view: Option<ScreenView>,
    focus: usize,
}

impl AppController {
    pub fn new(router: Router, root: Screen) -> Self {
        let mut navigator = StackNavigator::new(root);
        let changes = navigator.subscribe();
        Self {
            router,
            navigator: Rc::new(RefCell::new(navigator)),
            changes,
            mounted: None,
            view: None,
            focus: 0,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.borrow().peek()
    }

    pub fn back_stack(&self) -> Vec<Screen> {
        self.navigator.borrow().back_stack().entries().to_vec()
    }

    pub fn back_stack_depth(&self) -> usize {
        self.navigator.borrow().back_stack().depth()
    }

    /// Index of the focused button in the current view.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Run one composition pass: mount the presenter for the visible screen
    /// if it changed, present a fresh state and render it.
    pub fn compose(&mut self) -> Result<ScreenView, AppError> {
        let screen = self.current_screen();

        let remount = self.mounted.as_ref().is_none_or(|m| m.screen != screen);
        if remount {
            let navigator: SharedNavigator = self.navigator.clone();
            let presenter = self.router.presenter(screen, &navigator)?;
            tracing::debug!(%screen, "mounted presenter");
            self.mounted = Some(Mounted { screen, presenter });
            self.focus = 0;
        }

        let Some(mounted) = self.mounted.as_ref() else {
            return Err(AppError::NoPresenter(screen));
        };
        let state = mounted.presenter.present();
        if state.screen() != screen {
            return Err(AppError::StateMismatch(screen));
        }
        let view = self
            .router
            .ui(screen)?
            .content(&state)
            .ok_or(AppError::StateMismatch(screen))?;

        if self.focus >= view.buttons.len() {
            self.focus = 0;
        }
        self.view = Some(view.clone());
        Ok(view)
    }

    /// Apply an action to the last composed view.
    ///
    /// `AppAction::Quit` is a no-op here; the caller (platform runner)
    /// inspects the action before dispatching and stops its own loop.
    pub fn dispatch(&mut self, action: AppAction) -> Result<(), AppError> {
        if self.view.is_none() {
            self.compose()?;
        }
        let button_count = self.view.as_ref().map_or(0, |v| v.buttons.len());

        match action {
            AppAction::FocusNext => {
                if button_count > 0 {
                    self.focus = (self.focus + 1) % button_count;
                }
            }
            AppAction::FocusPrev => {
                if button_count > 0 {
                    self.focus = (self.focus + button_count - 1) % button_count;
                }
            }
            AppAction::Activate => self.activate(self.focus),
            AppAction::ActivateIndex(index) => self.activate(index),
            AppAction::NavigateBack => {
                self.navigator.borrow_mut().pop();
            }
            AppAction::Quit => {} // Handled by caller (runner loop)
        }

        if self.sync() {
            self.compose()?;
        }
        Ok(())
    }

    /// Drain pending navigation changes. Returns `true` when the visible
    /// screen changed since the last call.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        while let Ok(change) = self.changes.try_recv() {
            tracing::info!(screen = %change.screen(), depth = change.depth(), "navigated");
            changed = true;
        }
        if changed {
            self.focus = 0;
        }
        changed
    }

    fn activate(&mut self, index: usize) {
        // Clone the button out so its callback runs without borrowing `self`.
        let button = self.view.as_ref().and_then(|v| v.buttons.get(index)).cloned();
        match button {
            Some(button) => {
                tracing::debug!(label = button.label(), "button activated");
                self.focus = index;
                button.click();
            }
            None => tracing::debug!(index, "no button at index"),
        }
    }
}
