pub mod console_greeter;
pub mod stdout_greeter;

pub use console_greeter::{Console, ConsoleGreeter};
pub use stdout_greeter::StdoutGreeter;
