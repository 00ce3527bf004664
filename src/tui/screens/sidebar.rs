//! Sidebar navigation: category sections with their entries.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::catalog::CategoryIndex;
use crate::tui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    index: &CategoryIndex<'_>,
    current_id: Option<&str>,
    cursor_id: Option<&str>,
) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("  ⌂ LangDev", theme.title)));
    lines.push(Line::from(""));

    for section in index.sections() {
        lines.push(Line::from(Span::styled(
            format!("  {}", section.label.to_uppercase()),
            theme.category,
        )));
        for entry in &section.entries {
            let is_current = current_id == Some(entry.id.as_str());
            let under_cursor = cursor_id == Some(entry.id.as_str());

            let marker = if is_current { "▶" } else { " " };
            let style = if under_cursor {
                theme.selected
            } else if is_current {
                theme.highlight
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("  {} {} {}", marker, entry.icon, entry.name),
                style,
            )));
        }
        lines.push(Line::from(""));
    }

    let sidebar = Paragraph::new(lines).block(Block::default().borders(Borders::RIGHT));
    frame.render_widget(sidebar, area);
}
