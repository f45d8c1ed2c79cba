use std::io::{BufRead, Write};

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::infrastructure::tui::widgets::{header, layout, screen_view, status_bar};
use crate::interface_adapter::controller::{AppAction, AppController};
use crate::shared::config::ViewportSize;

/// Map one script line to an action. Matching is case-insensitive and
/// ignores surrounding whitespace.
pub fn parse_command(line: &str) -> Option<AppAction> {
    let command = line.trim().to_ascii_lowercase();
    match command.as_str() {
        "next" | "tab" => Some(AppAction::FocusNext),
        "prev" => Some(AppAction::FocusPrev),
        "enter" | "click" => Some(AppAction::Activate),
        "back" | "esc" => Some(AppAction::NavigateBack),
        "quit" | "q" => Some(AppAction::Quit),
        _ => match command.parse::<usize>() {
            Ok(n @ 1..=9) => Some(AppAction::ActivateIndex(n - 1)),
            _ => None,
        },
    }
}

/// Headless entry point.
///
/// Renders into an off-screen viewport of `size` and writes the initial
/// frame plus one frame after every command read from `input`. Runs until a
/// quit command or end of input.
pub fn run<R: BufRead, W: Write>(
    mut controller: AppController,
    input: R,
    mut output: W,
    size: ViewportSize,
) -> anyhow::Result<()> {
    let mut terminal = Terminal::new(TestBackend::new(size.cols, size.rows))?;
    tracing::info!(cols = size.cols, rows = size.rows, "headless session started");

    write_frame(&mut terminal, &mut controller, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(action) = parse_command(&line) else {
            tracing::warn!(command = %line.trim(), "unknown headless command");
            continue;
        };
        if action == AppAction::Quit {
            break;
        }
        controller.dispatch(action)?;
        write_frame(&mut terminal, &mut controller, &mut output)?;
    }

    output.flush()?;
    tracing::info!("headless session ended");
    Ok(())
}

fn write_frame<W: Write>(
    terminal: &mut Terminal<TestBackend>,
    controller: &mut AppController,
    output: &mut W,
) -> anyhow::Result<()> {
    let view = controller.compose()?;
    let back_stack = controller.back_stack();
    let depth = controller.back_stack_depth();
    let focus = controller.focus();

    terminal.draw(|frame| {
        let areas = layout::compute_layout(frame.area());
        header::render(frame, areas.header, &back_stack);
        screen_view::render(frame, areas.content, &view, focus);
        status_bar::render(frame, areas.status_bar, None);
    })?;

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    writeln!(
        output,
        "--- {} (depth {}) ---",
        controller.current_screen(),
        depth
    )?;
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        let row = row.trim_end();
        if !row.is_empty() {
            writeln!(output, "{row}")?;
        }
    }
    Ok(())
}
