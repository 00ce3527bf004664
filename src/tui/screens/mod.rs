//! Screen rendering for the browser.

pub mod detail;
pub mod overview;
pub mod sidebar;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;

/// Bottom help bar, shared by every screen.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme, in_detail: bool) {
    let mut spans = vec![
        Span::raw(" ↑↓ navigate  "),
        Span::raw("Enter open  "),
        Span::raw("Tab/←→ OS  "),
        Span::raw("w/m/l OS  "),
        Span::raw("c copy install  "),
    ];
    if in_detail {
        spans.push(Span::raw("v copy verify  "));
        spans.push(Span::raw("Esc/h home  "));
    } else {
        spans.push(Span::raw("h home  "));
    }
    spans.push(Span::raw("q quit"));

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(theme.help_bar);

    frame.render_widget(help, area);
}
