pub mod greeting_port;
pub mod navigator;

pub use greeting_port::GreetingPort;
pub use navigator::{Navigator, SharedNavigator};
