use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const KEY_HINTS: &str = "Tab/↑↓ focus  Enter/1-9 select  Esc back  q quit";

/// Bottom row: the last greeting if there is one, key hints otherwise.
pub fn render(frame: &mut Frame, area: Rect, message: Option<&str>) {
    frame.render_widget(Paragraph::new(status_line(message)), area);
}

fn status_line(message: Option<&str>) -> Line<'static> {
    match message {
        Some(message) => Line::from(Span::styled(
            format!("» {message}"),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
    }
}
