//! Messages for headless output.

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr, red when stderr is a terminal.
pub fn error(msg: &str) {
    if super::tty::stderr_is_terminal() {
        eprintln!("{RED}{msg}{RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Print a warning message to stderr, yellow when stderr is a terminal.
pub fn warn(msg: &str) {
    if super::tty::stderr_is_terminal() {
        eprintln!("{YELLOW}{msg}{RESET}");
    } else {
        eprintln!("{msg}");
    }
}

pub fn no_class_enabled() {
    error("No character class enabled, nothing to generate.");
}
