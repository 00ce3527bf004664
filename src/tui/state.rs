//! Session state for the browser.
//!
//! One instance lives for the whole session, owned by the [`App`]. All
//! transitions happen synchronously in response to a single user action, so
//! there is never a second writer.
//!
//! [`App`]: super::app::App

use crate::catalog::{Catalog, Os};

/// What the main pane is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Landing view: featured entries plus category navigation.
    Overview,
    /// A single entry's install guide.
    Detail { entry_id: String },
}

/// Mutable session state: current view, selected OS, copy feedback.
#[derive(Debug)]
pub struct SessionState {
    pub view: View,
    pub selected_os: Os,
    copy_feedback_active: bool,
    copy_token: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            view: View::Overview,
            selected_os: Os::Mac,
            copy_feedback_active: false,
            copy_token: 0,
        }
    }
}

impl SessionState {
    pub fn new(selected_os: Os) -> Self {
        Self {
            selected_os,
            ..Self::default()
        }
    }

    /// Open the detail view for `id`.
    ///
    /// An id absent from the catalog is ignored: the state stays where it is
    /// and `false` is returned. The OS selection survives; any pending copy
    /// feedback is dismissed.
    pub fn select_entry(&mut self, id: &str, catalog: &Catalog) -> bool {
        if catalog.by_id(id).is_none() {
            tracing::warn!(id, "ignoring selection of unknown catalog entry");
            return false;
        }
        self.view = View::Detail {
            entry_id: id.to_string(),
        };
        self.copy_feedback_active = false;
        true
    }

    /// Return to the overview. The OS selection survives.
    pub fn go_home(&mut self) {
        self.view = View::Overview;
    }

    /// Change the selected OS. Never touches the view.
    pub fn select_os(&mut self, os: Os) {
        self.selected_os = os;
    }

    pub fn copy_feedback_active(&self) -> bool {
        self.copy_feedback_active
    }

    /// Activate copy feedback and return the token the expiry timer must
    /// present to clear it again.
    pub fn begin_copy_feedback(&mut self) -> u64 {
        self.copy_token += 1;
        self.copy_feedback_active = true;
        self.copy_token
    }

    /// Clear copy feedback, but only if `token` is still the most recent one.
    /// A stale timer firing after a newer copy is a no-op.
    pub fn expire_copy_feedback(&mut self, token: u64) {
        if token == self.copy_token {
            self.copy_feedback_active = false;
        }
    }

    /// Id of the entry currently shown, if any.
    pub fn selected_entry_id(&self) -> Option<&str> {
        match &self.view {
            View::Overview => None,
            View::Detail { entry_id } => Some(entry_id),
        }
    }
}
