//! Presentation themes and the single-slot theme context.

use crate::pass::StrengthColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { ThemeKind::Dark } else { ThemeKind::Light }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// ANSI sequences for every styled element of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub base: &'static str,
    pub border: &'static str,
    pub field: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub success: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
    /// Icon for the toggle: shows the theme you switch to.
    pub toggle_icon: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            base: "\x1b[48;5;235m\x1b[38;5;252m",
            border: "\x1b[38;5;240m",
            field: "\x1b[48;5;238m\x1b[38;5;255m",
            accent: "\x1b[38;5;220m",
            muted: "\x1b[38;5;245m",
            success: "\x1b[38;5;114m",
            green: "\x1b[38;5;40m",
            yellow: "\x1b[38;5;220m",
            red: "\x1b[38;5;196m",
            toggle_icon: "☀",
        }
    }

    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            base: "\x1b[48;5;255m\x1b[38;5;236m",
            border: "\x1b[38;5;250m",
            field: "\x1b[48;5;253m\x1b[38;5;232m",
            accent: "\x1b[38;5;136m",
            muted: "\x1b[38;5;243m",
            success: "\x1b[38;5;28m",
            green: "\x1b[38;5;28m",
            yellow: "\x1b[38;5;136m",
            red: "\x1b[38;5;160m",
            toggle_icon: "☾",
        }
    }

    pub fn strength(&self, color: StrengthColor) -> &'static str {
        match color {
            StrengthColor::Green => self.green,
            StrengthColor::Yellow => self.yellow,
            StrengthColor::Red => self.red,
        }
    }
}

/// The currently applied theme. One writer (the controller), read by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeContext {
    current: Theme,
}

impl ThemeContext {
    pub fn new(kind: ThemeKind) -> Self {
        Self { current: kind.theme() }
    }

    pub fn apply(&mut self, kind: ThemeKind) {
        self.current = kind.theme();
        tracing::debug!(theme = kind.name(), "theme applied");
    }

    pub fn current(&self) -> &Theme {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_maps_to_kind() {
        assert_eq!(ThemeKind::from_dark_mode(true), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_dark_mode(false), ThemeKind::Light);
    }

    #[test]
    fn apply_replaces_the_single_slot() {
        let mut ctx = ThemeContext::new(ThemeKind::Dark);
        ctx.apply(ThemeKind::Light);
        assert_eq!(ctx.current().kind, ThemeKind::Light);
        ctx.apply(ThemeKind::Dark);
        assert_eq!(ctx.current(), &Theme::dark());
    }

    #[test]
    fn strength_colors_differ() {
        let theme = Theme::dark();
        assert_ne!(theme.strength(StrengthColor::Green), theme.strength(StrengthColor::Red));
    }
}
