//! Renders the widget from controller state.

use rand::Rng;

use crate::controller::{Clipboard, Controller};
use crate::pass::{CharClass, charset};
use crate::settings::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::Frame;

pub fn render<C: Clipboard, R: Rng>(controller: &Controller<C, R>) -> Frame<'_> {
    let theme = controller.theme();
    let settings = controller.settings();
    let mut frame = Frame::new(theme);

    frame.blank();
    frame.box_top("Password Generator");
    frame.box_line(&format!(
        "{}Theme: {:<5}{}{:>29}{} {}",
        theme.muted,
        theme.kind.name(),
        theme.base,
        "[t]",
        theme.accent,
        theme.toggle_icon
    ));
    frame.rule();

    let copied = if controller.copy_success() {
        format!(" {}Copied!", theme.success)
    } else {
        String::new()
    };
    frame.box_line(&format!(
        "{} {:<width$} {}  {}[c] Copy{}",
        theme.field,
        controller.password(),
        theme.base,
        theme.accent,
        copied,
        width = MAX_LENGTH
    ));
    frame.box_line("");

    frame.box_line(&format!(
        "Password Length: {:<3} {}◀ {}{} ▶",
        settings.length,
        theme.muted,
        theme.accent,
        slider(settings.length),
    ));

    for (key, class) in ('1'..='4').zip(CharClass::ALL) {
        frame.box_line(&checkbox(settings.includes(class), class.label(), key, theme.muted));
    }
    frame.box_line("");
    frame.box_line(&checkbox(
        settings.auto_generate,
        "Auto Regenerate",
        'a',
        theme.muted,
    ));
    frame.rule();

    frame.box_line_center(&format!("{}[Enter]{} Generate Password", theme.accent, theme.base));
    frame.rule();

    let strength = controller.strength();
    frame.box_line(&format!(
        "Strength: {}{}{}{}{:>width$}",
        theme.strength(strength.color()),
        strength.label(),
        theme.base,
        theme.muted,
        format!("Charset: {} chars", charset::size(settings)),
        width = 38 - strength.label().len()
    ));
    frame.rule();
    frame.box_line_center(&format!(
        "{}←/→ length  1-4 classes  a auto  q quit",
        theme.muted
    ));
    frame.box_bottom();

    frame
}

fn checkbox(checked: bool, label: &str, key: char, muted: &str) -> String {
    let mark = if checked { 'x' } else { ' ' };
    format!("[{mark}] {label:<38}{muted}[{key}]")
}

/// Slider track, one cell per selectable length.
fn slider(length: usize) -> String {
    (MIN_LENGTH..=MAX_LENGTH)
        .map(|n| match n.cmp(&length) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::clipboard::fake::RecordingClipboard;
    use crate::controller::Action;
    use crate::terminal::strip_ansi;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Instant;

    fn controller() -> Controller<RecordingClipboard, StdRng> {
        Controller::new(RecordingClipboard::default(), StdRng::seed_from_u64(11))
    }

    fn text<C: Clipboard, R: Rng>(c: &Controller<C, R>) -> String {
        strip_ansi(render(c).as_str())
    }

    #[test]
    fn initial_view() {
        let c = controller();
        let out = text(&c);
        assert!(out.contains("Password Length: 12"));
        assert!(out.contains("[x] Include Uppercase"));
        assert!(out.contains("[x] Include Symbols"));
        assert!(out.contains("[ ] Auto Regenerate"));
        assert!(out.contains("Strength: Too Short"));
        assert!(out.contains("Theme: Dark"));
        assert!(!out.contains("Copied!"));
    }

    #[test]
    fn shows_password_strength_and_copy_badge() {
        let mut c = controller();
        let now = Instant::now();
        c.dispatch(Action::Generate, now);
        c.dispatch(Action::Copy, now);
        let out = text(&c);
        assert!(out.contains(c.password()));
        assert!(out.contains(&format!("Strength: {}", c.strength().label())));
        assert!(out.contains("Copied!"));
    }

    #[test]
    fn reflects_toggles_and_theme() {
        let mut c = controller();
        let now = Instant::now();
        c.dispatch(Action::Toggle(CharClass::Numbers), now);
        c.dispatch(Action::ToggleAutoGenerate, now);
        c.dispatch(Action::ToggleTheme, now);
        let out = text(&c);
        assert!(out.contains("[ ] Include Numbers"));
        assert!(out.contains("[x] Auto Regenerate"));
        assert!(out.contains("Theme: Light"));
        assert!(out.contains("Charset: 81 chars"));
    }

    #[test]
    fn slider_marks_current_length() {
        assert_eq!(slider(MIN_LENGTH).chars().next(), Some('●'));
        assert_eq!(slider(MAX_LENGTH).chars().last(), Some('●'));
        assert_eq!(slider(12).chars().count(), MAX_LENGTH - MIN_LENGTH + 1);
        assert_eq!(slider(12).chars().position(|c| c == '●'), Some(12 - MIN_LENGTH));
    }
}
