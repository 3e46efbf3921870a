use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::Action;
use crate::pass::CharClass;
use crate::settings::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Redraw,
    Quit,
}

/// Map a terminal event to a view command.
pub fn map_event(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        Event::Resize(..) => Some(Command::Redraw),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Command> {
    use Action::*;

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Command::Quit);
        }
        KeyCode::Esc | KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Enter | KeyCode::Char('g') => Generate,
        KeyCode::Char('c') => Copy,
        KeyCode::Left | KeyCode::Char('-') => LengthDown,
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => LengthUp,
        KeyCode::Home => SetLength(MIN_LENGTH),
        KeyCode::End => SetLength(MAX_LENGTH),
        KeyCode::Char('1') => Toggle(CharClass::Uppercase),
        KeyCode::Char('2') => Toggle(CharClass::Lowercase),
        KeyCode::Char('3') => Toggle(CharClass::Numbers),
        KeyCode::Char('4') => Toggle(CharClass::Symbols),
        KeyCode::Char('a') => ToggleAutoGenerate,
        KeyCode::Char('t') => ToggleTheme,
        _ => return None,
    };
    Some(Command::Act(action))
}
