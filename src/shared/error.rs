use crate::domain::primitive::Screen;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("No presenter registered for screen: {0}")]
    NoPresenter(Screen),

    #[error("No ui registered for screen: {0}")]
    NoUi(Screen),

    #[error("Ui for screen {0} was handed a state of another screen")]
    StateMismatch(Screen),

    #[error("TUI error: {0}")]
    Tui(#[source] std::io::Error),
}
