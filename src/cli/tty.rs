//! Terminal detection.

pub fn stdout_is_terminal() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

pub fn stdin_is_terminal() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

pub fn stderr_is_terminal() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

/// The widget needs a keyboard and a screen.
pub fn is_interactive() -> bool {
    stdin_is_terminal() && stdout_is_terminal()
}
