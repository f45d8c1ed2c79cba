pub mod bar_view;
pub mod foo_view;

use std::fmt;
use std::rc::Rc;

use crate::interface_adapter::screen::UiState;

/// A clickable element of a screen.
#[derive(Clone)]
pub struct Button {
    label: String,
    on_click: Rc<dyn Fn()>,
}

impl Button {
    pub fn new(label: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            on_click: Rc::new(on_click),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn click(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button").field("label", &self.label).finish()
    }
}

/// Backend-independent description of what a screen shows: a title above
/// a vertical column of buttons.
#[derive(Debug, Clone)]
pub struct ScreenView {
    pub title: String,
    pub buttons: Vec<Button>,
}

/// Turns the render state of one screen into a `ScreenView`.
pub trait Ui {
    /// Returns `None` when `state` belongs to another screen.
    fn content(&self, state: &UiState) -> Option<ScreenView>;
}

impl<F> Ui for F
where
    F: Fn(&UiState) -> Option<ScreenView>,
{
    fn content(&self, state: &UiState) -> Option<ScreenView> {
        self(state)
    }
}
