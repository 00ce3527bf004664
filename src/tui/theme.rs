use ratatui::style::{Color, Modifier, Style};

/// Consistent theme for the TUI
pub struct Theme {
    pub title: Style,
    pub selected: Style,
    pub category: Style,
    pub command: Style,
    pub verify: Style,
    pub success: Style,
    pub warning: Style,
    pub muted: Style,
    pub highlight: Style,
    pub help_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            category: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            command: Style::default()
                .fg(Color::Blue),
            verify: Style::default()
                .fg(Color::Green),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            warning: Style::default()
                .fg(Color::Yellow),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            help_bar: Style::default()
                .bg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Style for an OS tab, depending on whether it is the active one.
    pub fn os_tab(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}
