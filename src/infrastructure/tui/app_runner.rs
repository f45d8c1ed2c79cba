use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::infrastructure::greeting::Console;
use crate::infrastructure::tui::input;
use crate::infrastructure::tui::widgets::{header, layout, screen_view, status_bar};
use crate::interface_adapter::controller::{AppAction, AppController};
use crate::shared::error::AppError;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Interactive terminal entry point.
///
/// Initializes crossterm raw mode + alternate screen, creates the ratatui
/// Terminal, runs the compose -> draw -> input loop, and restores the
/// terminal on exit (also when the loop fails).
pub fn run(mut controller: AppController, console: Console) -> anyhow::Result<()> {
    // === Initialization ===
    enable_raw_mode().map_err(AppError::Tui)?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(AppError::Tui(err).into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("terminal session started");

    // === Main loop ===
    let result = main_loop(&mut terminal, &mut controller, &console);

    // === Cleanup (always runs) ===
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    tracing::info!(ok = result.is_ok(), "terminal session ended");
    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
    console: &Console,
) -> anyhow::Result<()> {
    loop {
        // 1. Compose
        let view = controller.compose()?;
        let back_stack = controller.back_stack();
        let focus = controller.focus();
        let message = console.last();

        // 2. Draw
        terminal.draw(|frame| {
            let areas = layout::compute_layout(frame.area());
            header::render(frame, areas.header, &back_stack);
            screen_view::render(frame, areas.content, &view, focus);
            status_bar::render(frame, areas.status_bar, message.as_deref());
        })?;

        // 3. Input
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            // Resize and other events just trigger a redraw.
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match input::key_to_action(key) {
            Some(AppAction::Quit) => return Ok(()),
            Some(action) => controller.dispatch(action)?,
            None => {}
        }
    }
}
