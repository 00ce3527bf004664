//! Overview screen: banner, one-line bootstrap snippet, featured entries.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::catalog::{bootstrap_snippet, Entry, Os};
use crate::tui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    featured: &[Entry],
    selected_os: Os,
    copy_feedback_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Banner
            Constraint::Length(6), // Bootstrap snippet
            Constraint::Min(0),    // Featured entries
        ])
        .split(area);

    render_banner(frame, chunks[0], theme);
    render_snippet(frame, chunks[1], theme, selected_os, copy_feedback_active);
    render_featured(frame, chunks[2], theme, featured);
}

fn render_banner(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Install Any Language", theme.title)),
        Line::from("One command to set up languages and developer tools"),
        Line::from(Span::styled(
            "on Windows, macOS and Linux.",
            theme.muted,
        )),
    ];
    let banner = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

fn render_snippet(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    selected_os: Os,
    copy_feedback_active: bool,
) {
    let mut tabs: Vec<Span> = vec![Span::raw(" ")];
    for os in Os::ALL {
        tabs.push(Span::styled(
            format!(" {} ", os.label()),
            theme.os_tab(os == selected_os),
        ));
        tabs.push(Span::raw(" "));
    }

    let copy_hint = if copy_feedback_active {
        Span::styled("✓ Copied!", theme.success)
    } else {
        Span::styled("press c to copy", theme.muted)
    };

    let lines = vec![
        Line::from(tabs),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(bootstrap_snippet(selected_os), theme.command),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", selected_os.shell_label()))
        .title_bottom(Line::from(copy_hint).right_aligned());
    let snippet = Paragraph::new(lines).block(block);
    frame.render_widget(snippet, area);
}

fn render_featured(frame: &mut Frame, area: Rect, theme: &Theme, featured: &[Entry]) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled("  Popular", theme.category)));
    lines.push(Line::from(""));

    for entry in featured {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", entry.icon)),
            Span::styled(entry.name.clone(), theme.highlight),
            Span::styled(format!("  ({})", entry.category), theme.muted),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", entry.description),
            theme.muted,
        )));
        lines.push(Line::from(""));
    }

    let featured_list = Paragraph::new(lines);
    frame.render_widget(featured_list, area);
}
