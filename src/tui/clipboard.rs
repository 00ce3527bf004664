//! Clipboard bridge.
//!
//! The app only decides what string to hand over; the actual platform write
//! sits behind a trait so tests can substitute a stub.

use crate::{LangdevError, Result};

/// Writes text to the system clipboard.
pub trait ClipboardBridge {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard backed by `arboard`.
///
/// The handle is created lazily on first use and kept for the session; some
/// platforms drop clipboard contents when the owning handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBridge for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(
                arboard::Clipboard::new().map_err(|e| LangdevError::Clipboard(e.to_string()))?,
            );
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(LangdevError::Clipboard("clipboard unavailable".into()));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| LangdevError::Clipboard(e.to_string()))
    }
}
