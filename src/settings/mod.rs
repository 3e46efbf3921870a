//! Widget configuration state. Lives for the session only.

use crate::pass::CharClass;

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub auto_generate: bool,
    pub dark_mode: bool,
}

impl Settings {
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Numbers => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        let flag = match class {
            CharClass::Uppercase => &mut self.include_uppercase,
            CharClass::Lowercase => &mut self.include_lowercase,
            CharClass::Numbers => &mut self.include_numbers,
            CharClass::Symbols => &mut self.include_symbols,
        };
        *flag = !*flag;
    }

    /// Clamp a requested length to the slider range.
    pub fn clamp_length(length: usize) -> usize {
        length.clamp(MIN_LENGTH, MAX_LENGTH)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            auto_generate: false,
            dark_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.length, 12);
        assert!(CharClass::ALL.iter().all(|&c| s.includes(c)));
        assert!(!s.auto_generate);
        assert!(s.dark_mode);
    }

    #[test]
    fn toggle_flips_only_that_class() {
        let mut s = Settings::default();
        s.toggle(CharClass::Numbers);
        assert!(!s.include_numbers);
        assert!(s.include_uppercase && s.include_lowercase && s.include_symbols);
        s.toggle(CharClass::Numbers);
        assert!(s.include_numbers);
    }

    #[test]
    fn clamp_length_to_slider_range() {
        assert_eq!(Settings::clamp_length(0), MIN_LENGTH);
        assert_eq!(Settings::clamp_length(18), 18);
        assert_eq!(Settings::clamp_length(99), MAX_LENGTH);
    }
}
