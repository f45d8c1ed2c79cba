use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::interface_adapter::view::ScreenView;

/// Draw a `ScreenView` as a centered column: title, then each button with
/// one blank row between items. The button at `focus` is highlighted.
pub fn render(frame: &mut Frame, area: Rect, view: &ScreenView, focus: usize) {
    let lines = build_lines(view, focus);
    let height = (lines.len() as u16).min(area.height);
    let y = area.y + area.height.saturating_sub(height) / 2;
    let column = Rect::new(area.x, y, area.width, height);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), column);
}

fn build_lines(view: &ScreenView, focus: usize) -> Vec<Line<'static>> {
    // All buttons share the width of the widest label.
    let width = view
        .buttons
        .iter()
        .map(|b| b.label().width())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from(Span::styled(
        view.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for (index, button) in view.buttons.iter().enumerate() {
        let style = if index == focus {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", pad_center(button.label(), width)),
            style,
        )));
    }
    lines
}

fn pad_center(label: &str, width: usize) -> String {
    let pad = width.saturating_sub(label.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(pad - left))
}
