use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use tokio::time;

use crate::catalog::{bootstrap_snippet, Catalog, CategoryIndex, Os};
use crate::Result;

use super::clipboard::{ClipboardBridge, SystemClipboard};
use super::events::AppEvent;
use super::screens;
use super::state::{SessionState, View};
use super::theme::Theme;
use super::view::{self, RenderModel};

/// How long the "Copied!" indicator stays up after a successful copy.
const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// Width of the sidebar pane.
const SIDEBAR_WIDTH: u16 = 30;

/// Main application struct
pub struct App {
    catalog: Catalog,
    /// Session state driving the view composer
    state: SessionState,
    /// Sidebar cursor: index into the grouped entry list
    cursor: usize,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Clipboard bridge, swappable in tests
    clipboard: Box<dyn ClipboardBridge>,
    /// Event sender for the copy-feedback timer
    event_tx: Option<tokio::sync::mpsc::UnboundedSender<AppEvent>>,
    /// Last time Ctrl+C was pressed, for double-press exit
    last_ctrl_c: Option<std::time::Instant>,
}

impl App {
    /// Create a new app instance over the built-in catalog.
    pub fn new(initial_os: Os) -> Self {
        Self::with_clipboard(initial_os, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(initial_os: Os, clipboard: Box<dyn ClipboardBridge>) -> Self {
        Self {
            catalog: Catalog::builtin(),
            state: SessionState::new(initial_os),
            cursor: 0,
            should_quit: false,
            theme: Theme::default(),
            clipboard,
            event_tx: None,
            last_ctrl_c: None,
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // Create event channel
        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Spawn input handler
        let input_tx = event_tx.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if input_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Event::Resize(width, height) => {
                            let _ = input_tx.send(AppEvent::Resize(width, height));
                        }
                        _ => {}
                    }
                }
            }
        });

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout so the feedback indicator redraws
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current projection of catalog + session state
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[0]);

        let model = view::compose(&self.catalog, &self.state);

        let index = CategoryIndex::build(&self.catalog);
        let cursor_id = index.entry_ids().get(self.cursor).copied();
        screens::sidebar::render(
            frame,
            panes[0],
            &self.theme,
            &index,
            self.state.selected_entry_id(),
            cursor_id,
        );

        match &model {
            RenderModel::Overview { featured, .. } => {
                screens::overview::render(
                    frame,
                    panes[1],
                    &self.theme,
                    featured,
                    self.state.selected_os,
                    self.state.copy_feedback_active(),
                );
            }
            RenderModel::Detail {
                entry,
                selected_os,
                install_text,
                verify_text,
                copy_feedback_active,
            } => {
                screens::detail::render(
                    frame,
                    panes[1],
                    &self.theme,
                    entry,
                    *selected_os,
                    install_text,
                    verify_text,
                    *copy_feedback_active,
                );
            }
        }

        let in_detail = matches!(model, RenderModel::Detail { .. });
        screens::render_help(frame, chunks[1], &self.theme, in_detail);
    }

    /// Handle an event
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                // Global keys first
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        self.should_quit = true;
                        return;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                        // Exit on double Ctrl+C within one second
                        let now = std::time::Instant::now();
                        if let Some(last) = self.last_ctrl_c {
                            if now.duration_since(last).as_millis() < 1000 {
                                self.should_quit = true;
                                return;
                            }
                        }
                        self.last_ctrl_c = Some(now);
                        return;
                    }
                    _ => {}
                }
                self.handle_key(key.code);
            }
            AppEvent::CopyFeedbackExpired { token } => {
                self.state.expire_copy_feedback(token);
            }
            AppEvent::Resize(..) | AppEvent::Tick => {
                // Redraw happens at the top of the loop
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                // From a detail view Esc goes home; from the overview it quits
                match self.state.view {
                    View::Detail { .. } => self.state.go_home(),
                    View::Overview => self.should_quit = true,
                }
            }
            KeyCode::Char('h') | KeyCode::Home => self.state.go_home(),
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let last = self.catalog.len().saturating_sub(1);
                if self.cursor < last {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => {
                // Cursor ids come from the category index, so the selection
                // precondition (id present in the catalog) always holds.
                let index = CategoryIndex::build(&self.catalog);
                if let Some(id) = index.entry_ids().get(self.cursor) {
                    let id = id.to_string();
                    self.state.select_entry(&id, &self.catalog);
                }
            }
            KeyCode::Tab | KeyCode::Right => {
                self.state.select_os(self.state.selected_os.next());
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.state.select_os(self.state.selected_os.prev());
            }
            KeyCode::Char('w') => self.state.select_os(Os::Windows),
            KeyCode::Char('m') => self.state.select_os(Os::Mac),
            KeyCode::Char('l') => self.state.select_os(Os::Linux),
            KeyCode::Char('c') => {
                let text = self.visible_install_text().to_string();
                self.request_copy(&text);
            }
            KeyCode::Char('v') => {
                let text = self
                    .state
                    .selected_entry_id()
                    .and_then(|id| self.catalog.by_id(id))
                    .map(|entry| entry.verify_command.clone());
                if let Some(text) = text {
                    self.request_copy(&text);
                }
            }
            _ => {}
        }
    }

    /// The install command currently on screen: the entry's per-OS command in
    /// a detail view, the bootstrap snippet on the overview.
    fn visible_install_text(&self) -> &str {
        match view::compose(&self.catalog, &self.state) {
            RenderModel::Detail { install_text, .. } => install_text,
            RenderModel::Overview { .. } => bootstrap_snippet(self.state.selected_os),
        }
    }

    /// Hand `text` to the clipboard bridge and, on success, raise the copy
    /// feedback with a deferred reset. A failed copy is logged and otherwise
    /// invisible. Empty text is a no-op.
    fn request_copy(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.clipboard.copy(text) {
            Ok(()) => {
                let token = self.state.begin_copy_feedback();
                if let Some(tx) = &self.event_tx {
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        time::sleep(COPY_FEEDBACK_TTL).await;
                        let _ = tx.send(AppEvent::CopyFeedbackExpired { token });
                    });
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::LangdevError;

    struct RecordingClipboard {
        copies: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl ClipboardBridge for RecordingClipboard {
        fn copy(&mut self, text: &str) -> crate::Result<()> {
            if self.fail {
                return Err(LangdevError::Clipboard("denied".into()));
            }
            self.copies.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn test_app(fail: bool) -> (App, Arc<Mutex<Vec<String>>>) {
        let copies = Arc::new(Mutex::new(Vec::new()));
        let clipboard = RecordingClipboard {
            copies: Arc::clone(&copies),
            fail,
        };
        (App::with_clipboard(Os::Mac, Box::new(clipboard)), copies)
    }

    #[test]
    fn copy_on_detail_sends_the_os_install_command() {
        let (mut app, copies) = test_app(false);
        app.state.select_entry("rust", &app.catalog);
        app.handle_key(KeyCode::Char('w'));
        app.handle_key(KeyCode::Char('c'));

        let copies = copies.lock().unwrap();
        assert_eq!(copies.len(), 1);
        assert_eq!(copies[0], "curl -fsSL https://get.lang.dev/rust | powershell");
        assert!(app.state.copy_feedback_active());
    }

    #[test]
    fn copy_on_overview_sends_the_bootstrap_snippet() {
        let (mut app, copies) = test_app(false);
        app.handle_key(KeyCode::Char('c'));
        assert_eq!(
            copies.lock().unwrap()[0],
            "curl -fsSL https://get.lang.dev/install.sh | bash"
        );
    }

    #[test]
    fn failed_copy_leaves_feedback_off() {
        let (mut app, copies) = test_app(true);
        app.handle_key(KeyCode::Char('c'));
        assert!(copies.lock().unwrap().is_empty());
        assert!(!app.state.copy_feedback_active());
    }

    #[test]
    fn empty_text_is_not_copied() {
        let (mut app, copies) = test_app(false);
        app.request_copy("");
        assert!(copies.lock().unwrap().is_empty());
        assert!(!app.state.copy_feedback_active());
    }

    #[test]
    fn enter_opens_the_entry_under_the_cursor() {
        let (mut app, _) = test_app(false);
        // Sidebar order groups by category: javascript, then the languages.
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state.selected_entry_id(), Some("python"));
    }

    #[test]
    fn esc_goes_home_from_detail_and_quits_from_overview() {
        let (mut app, _) = test_app(false);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state.selected_entry_id(), Some("javascript"));

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.state.selected_entry_id(), None);
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_the_selected_os() {
        let (mut app, _) = test_app(false);
        assert_eq!(app.state.selected_os, Os::Mac);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.state.selected_os, Os::Linux);
        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.state.selected_os, Os::Mac);
    }
}
