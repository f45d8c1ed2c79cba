pub mod greeting;
pub mod tui;
