//! Raw mode + alternate screen RAII guard.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Guard that restores the terminal when dropped.
pub struct ScreenGuard {
    active: bool,
}

impl ScreenGuard {
    /// Enter raw mode on the alternate screen with the cursor hidden.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        crate::exits::set_screen_active(true);
        Ok(Self { active: true })
    }

    /// Manually restore (also happens on drop).
    pub fn restore(&mut self) {
        if self.active {
            let mut out = io::stdout();
            let _ = execute!(out, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            let _ = out.flush();
            crate::exits::set_screen_active(false);
            self.active = false;
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
