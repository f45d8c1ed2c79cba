//! Per-screen render state and event vocabulary.

pub mod bar;
pub mod event_sink;
pub mod foo;

pub use bar::{BarEvent, BarState};
pub use event_sink::EventSink;
pub use foo::{FooEvent, FooState};

use crate::domain::primitive::Screen;

/// Type-erased render state handed from a presenter to its ui.
#[derive(Debug, Clone)]
pub enum UiState {
    Foo(FooState),
    Bar(BarState),
}

impl UiState {
    /// The screen this state belongs to.
    pub fn screen(&self) -> Screen {
        match self {
            Self::Foo(_) => Screen::Foo,
            Self::Bar(_) => Screen::Bar,
        }
    }
}
