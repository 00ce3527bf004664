//! Detail screen: one entry's install guide for the selected OS.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{Entry, Os};
use crate::tui::theme::Theme;

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    entry: &Entry,
    selected_os: Os,
    install_text: &str,
    verify_text: &str,
    copy_feedback_active: bool,
) {
    let prereq_height = if entry.prerequisites.is_empty() {
        0
    } else {
        entry.prerequisites.len() as u16 + 3
    };
    let steps_height = if entry.additional_steps.is_empty() {
        0
    } else {
        entry.additional_steps.len() as u16 + 3
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Header
            Constraint::Length(prereq_height), // Prerequisites
            Constraint::Length(6),             // Install command
            Constraint::Length(4),             // Verify command
            Constraint::Length(steps_height),  // Additional steps
            Constraint::Min(0),                // Next steps
        ])
        .split(area);

    render_header(frame, chunks[0], theme, entry);
    if !entry.prerequisites.is_empty() {
        render_prerequisites(frame, chunks[1], theme, entry);
    }
    render_install(
        frame,
        chunks[2],
        theme,
        selected_os,
        install_text,
        copy_feedback_active,
    );
    render_verify(frame, chunks[3], theme, verify_text);
    if !entry.additional_steps.is_empty() {
        render_steps(frame, chunks[4], theme, entry);
    }
    render_next_steps(frame, chunks[5], theme, entry);
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, entry: &Entry) {
    let lines = vec![
        Line::from(vec![
            Span::raw(format!(" {} ", entry.icon)),
            Span::styled(entry.name.clone(), theme.title),
            Span::styled(format!("  [{}]", entry.category), theme.muted),
        ]),
        Line::from(Span::raw(format!("   {}", entry.description))),
        Line::from(vec![
            Span::styled("   docs: ", theme.muted),
            Span::styled(entry.official_docs.clone(), theme.highlight),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_prerequisites(frame: &mut Frame, area: Rect, theme: &Theme, entry: &Entry) {
    let lines: Vec<Line> = entry
        .prerequisites
        .iter()
        .map(|p| Line::from(format!(" • {p}")))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" ⚠ Prerequisites ", theme.warning));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_install(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    selected_os: Os,
    install_text: &str,
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
            Span::styled(install_text.to_string(), theme.command),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Install · {} ", selected_os.shell_label()))
        .title_bottom(Line::from(copy_hint).right_aligned());
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_verify(frame: &mut Frame, area: Rect, theme: &Theme, verify_text: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Verify installation ")
        .title_bottom(
            Line::from(Span::styled("press v to copy", theme.muted)).right_aligned(),
        );
    let lines = vec![Line::from(vec![
        Span::raw("  "),
        Span::styled(verify_text.to_string(), theme.verify),
    ])];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_steps(frame: &mut Frame, area: Rect, theme: &Theme, entry: &Entry) {
    let lines: Vec<Line> = entry
        .additional_steps
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(" ✓ ", theme.success),
                Span::raw(s.clone()),
            ])
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Additional information ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_next_steps(frame: &mut Frame, area: Rect, theme: &Theme, entry: &Entry) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(" What's next?", theme.category)),
        Line::from(format!(
            " 🎉 Once the verify command succeeds, {} is ready to use.",
            entry.name
        )),
        Line::from(vec![
            Span::raw(" Read the official docs: "),
            Span::styled(entry.official_docs.clone(), theme.highlight),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
