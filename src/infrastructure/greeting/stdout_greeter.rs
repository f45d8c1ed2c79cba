use std::io::{self, Write};

use crate::interface_adapter::port::GreetingPort;

/// Prints greetings as plain lines on stdout.
pub struct StdoutGreeter;

impl GreetingPort for StdoutGreeter {
    fn greet(&self, message: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{message}") {
            tracing::warn!(error = %err, "failed to write greeting");
        }
    }
}
