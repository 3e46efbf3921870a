//! Widget state and the reactive rules that tie it together.
//!
//! Length and class changes regenerate when auto-generate is on. Theme
//! changes are pushed into the theme context. Everything else is a plain
//! field update.

pub mod clipboard;
mod feedback;

use std::time::Instant;

use rand::Rng;
use zeroize::Zeroizing;

use crate::pass::{self, CharClass, Strength};
use crate::settings::Settings;
use crate::theme::{Theme, ThemeContext, ThemeKind};

pub use clipboard::{Clipboard, SystemClipboard};
use feedback::CopyFeedback;

/// A user intent coming from the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    SetLength(usize),
    LengthUp,
    LengthDown,
    Toggle(CharClass),
    ToggleAutoGenerate,
    ToggleTheme,
}

pub struct Controller<C, R> {
    settings: Settings,
    password: Zeroizing<String>,
    /// Count of passwords produced so far.
    generation: u64,
    copy_feedback: CopyFeedback,
    theme: ThemeContext,
    clipboard: C,
    rng: R,
}

impl<C: Clipboard, R: Rng> Controller<C, R> {
    pub fn new(clipboard: C, rng: R) -> Self {
        let settings = Settings::default();
        let theme = ThemeContext::new(ThemeKind::from_dark_mode(settings.dark_mode));
        Self {
            settings,
            password: Zeroizing::new(String::new()),
            generation: 0,
            copy_feedback: CopyFeedback::default(),
            theme,
            clipboard,
            rng,
        }
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) {
        match action {
            Action::Generate => self.generate(),
            Action::Copy => self.copy(now),
            Action::SetLength(len) => self.set_length(len),
            Action::LengthUp => self.set_length(self.settings.length.saturating_add(1)),
            Action::LengthDown => self.set_length(self.settings.length.saturating_sub(1)),
            Action::Toggle(class) => self.toggle_class(class),
            Action::ToggleAutoGenerate => self.toggle_auto_generate(),
            Action::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Replace the password. Leaves it alone when no class is enabled.
    pub fn generate(&mut self) {
        match pass::generate(&self.settings, &mut self.rng) {
            Some(password) => {
                self.password = password;
                self.generation += 1;
                tracing::debug!(
                    generation = self.generation,
                    length = self.settings.length,
                    "password generated"
                );
            }
            None => tracing::debug!("no character class enabled, generation skipped"),
        }
    }

    /// Copy the current password. A clipboard failure is logged and leaves
    /// the copied flag untouched.
    pub fn copy(&mut self, now: Instant) {
        match self.clipboard.set_text(&self.password) {
            Ok(()) => {
                self.copy_feedback.trigger(now);
                tracing::debug!("password copied to clipboard");
            }
            Err(e) => tracing::warn!(error = %e, "copy to clipboard failed"),
        }
    }

    /// Slider input; out-of-range values are clamped like the control would.
    pub fn set_length(&mut self, length: usize) {
        let length = Settings::clamp_length(length);
        if length == self.settings.length {
            return;
        }
        self.settings.length = length;
        self.config_changed();
    }

    pub fn toggle_class(&mut self, class: CharClass) {
        self.settings.toggle(class);
        self.config_changed();
    }

    pub fn toggle_auto_generate(&mut self) {
        self.settings.auto_generate = !self.settings.auto_generate;
    }

    pub fn toggle_theme(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.theme
            .apply(ThemeKind::from_dark_mode(self.settings.dark_mode));
    }

    /// Advance deferred work to `now`. Returns true if the view changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.copy_feedback.tick(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.copy_feedback.next_deadline()
    }

    fn config_changed(&mut self) {
        if self.settings.auto_generate {
            self.generate();
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn copy_success(&self) -> bool {
        self.copy_feedback.is_active()
    }

    /// Derived on every call, never cached.
    pub fn strength(&self) -> Strength {
        pass::rate(&self.password)
    }

    pub fn theme(&self) -> &Theme {
        self.theme.current()
    }
}
