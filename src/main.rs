mod domain;
mod usecase;
mod interface_adapter;
mod infrastructure;
mod shared;

use std::io::{self, IsTerminal};

use crate::domain::primitive::Screen;
use crate::infrastructure::greeting::{Console, ConsoleGreeter, StdoutGreeter};
use crate::infrastructure::tui::{app_runner, headless_runner};
use crate::interface_adapter::adapter::{domain_module, ui_module};
use crate::interface_adapter::controller::AppController;
use crate::shared::config::AppConfig;
use crate::shared::logging;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config);
    config.report_rejected();

    if io::stdout().is_terminal() {
        // Interactive: greetings land in the status bar.
        let console = Console::new();
        let domain = domain_module(ConsoleGreeter::new(console.clone()));
        let router = ui_module(&domain);
        let controller = AppController::new(router, Screen::Foo);

        app_runner::run(controller, console)
    } else {
        // Headless: scripted commands on stdin, frames and greetings on stdout.
        let domain = domain_module(StdoutGreeter);
        let router = ui_module(&domain);
        let controller = AppController::new(router, Screen::Foo);

        headless_runner::run(controller, io::stdin().lock(), io::stdout(), config.viewport)
    }
}
