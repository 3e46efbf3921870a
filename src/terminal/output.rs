//! Terminal output utilities.
//!
//! Frames are built in memory and written in one go so a redraw never
//! flickers. Every line ends in `\r\n` because the view runs in raw mode.

use std::io::{self, Write};

use crate::theme::Theme;

// ============================================================================
// ANSI Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Move home, paint the whole screen in the theme background.
fn clear_with(base: &str) -> String {
    format!("{base}\x1b[H\x1b[2J")
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 52;

/// One screenful of themed box-drawn lines.
pub struct Frame<'a> {
    theme: &'a Theme,
    buf: String,
}

impl<'a> Frame<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            buf: clear_with(theme.base),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.buf.push_str(self.theme.base);
        self.buf.push_str(line);
        self.buf.push_str(self.theme.base);
        self.buf.push_str("\x1b[K\r\n");
    }

    /// ┌─ Title ──────────┐
    pub fn box_top(&mut self, title: &str) {
        let border = self.theme.border;
        let line = if title.is_empty() {
            format!("{border}┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
            format!(
                "{border}┌─ {}{BOLD}{title}{RESET}{}{border} {}┐",
                self.theme.base,
                self.theme.base,
                "─".repeat(remaining)
            )
        };
        self.push_line(&line);
    }

    /// │ content          │
    pub fn box_line(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        let border = self.theme.border;
        let base = self.theme.base;
        let line = format!(
            "{border}│{base} {content}{base}{} {border}│",
            " ".repeat(padding)
        );
        self.push_line(&line);
    }

    /// │     content      │
    pub fn box_line_center(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        let border = self.theme.border;
        let base = self.theme.base;
        let line = format!(
            "{border}│{base} {}{content}{base}{} {border}│",
            " ".repeat(left_pad),
            " ".repeat(right_pad)
        );
        self.push_line(&line);
    }

    /// ├──────────────────┤
    pub fn rule(&mut self) {
        let line = format!("{}├{}┤", self.theme.border, "─".repeat(BOX_WIDTH - 2));
        self.push_line(&line);
    }

    /// └──────────────────┘
    pub fn box_bottom(&mut self) {
        let line = format!("{}└{}┘", self.theme.border, "─".repeat(BOX_WIDTH - 2));
        self.push_line(&line);
    }

    pub fn blank(&mut self) {
        self.push_line("");
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Write the frame to `out` and flush.
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.buf.as_bytes())?;
        out.write_all(RESET.as_bytes())?;
        out.flush()
    }
}

/// Display width ignoring ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Strip ANSI escape codes, keeping the visible text.
#[cfg(test)]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else {
            out.push(c);
        }
    }
    out
}
