use ratatui::layout::{Constraint, Layout, Rect};

pub struct LayoutAreas {
    pub header: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> LayoutAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);
    LayoutAreas {
        header: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}
