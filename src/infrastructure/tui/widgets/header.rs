use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::primitive::Screen;

const SEPARATOR: &str = " › ";

/// Breadcrumb trail of the back-stack, root first. The visible screen is bold.
pub fn render(frame: &mut Frame, area: Rect, back_stack: &[Screen]) {
    frame.render_widget(Paragraph::new(breadcrumbs(back_stack)), area);
}

fn breadcrumbs(back_stack: &[Screen]) -> Line<'static> {
    let last = back_stack.len().saturating_sub(1);
    let mut spans = Vec::with_capacity(back_stack.len() * 2);
    for (index, screen) in back_stack.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        }
        let style = if index == last {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(screen.name(), style));
    }
    Line::from(spans)
}
