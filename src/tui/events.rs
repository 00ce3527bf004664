use ratatui::crossterm::event::KeyEvent;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    /// Copy-feedback timer fired. Ignored unless `token` is still the most
    /// recent copy (see [`SessionState::expire_copy_feedback`]).
    ///
    /// [`SessionState::expire_copy_feedback`]: super::state::SessionState::expire_copy_feedback
    CopyFeedbackExpired { token: u64 },

    // UI events
    Tick,
}
