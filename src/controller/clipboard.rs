//! Clipboard access.
//!
//! The system clipboard is opened on first use and kept for the session so
//! X11 selections stay owned while the app runs.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Anything that can receive copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no context".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;

    /// Records every write.
    #[derive(Default)]
    pub struct RecordingClipboard {
        pub writes: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.push(text.to_owned());
            Ok(())
        }
    }

    /// Always refuses, like a headless session without a display server.
    pub struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("permission denied".to_string()))
        }
    }
}
