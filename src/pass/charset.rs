//! Character classes and alphabet building for password generation.

use crate::settings::Settings;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// One selectable group of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Classes in the order their alphabets are concatenated.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Include Uppercase",
            CharClass::Lowercase => "Include Lowercase",
            CharClass::Numbers => "Include Numbers",
            CharClass::Symbols => "Include Symbols",
        }
    }
}

/// Build the allowed alphabet from the enabled classes.
/// Empty when every class is switched off.
pub fn build(settings: &Settings) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::new();

    for class in CharClass::ALL {
        if settings.includes(class) {
            chars.extend_from_slice(class.alphabet());
        }
    }

    chars
}

/// Size of the allowed alphabet.
pub fn size(settings: &Settings) -> usize {
    CharClass::ALL
        .iter()
        .filter(|&&class| settings.includes(class))
        .map(|class| class.alphabet().len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharClass::Numbers.alphabet().len(), 10);
        assert_eq!(CharClass::Symbols.alphabet().len(), 29);
    }

    #[test]
    fn build_concatenates_in_class_order() {
        let settings = Settings {
            include_lowercase: false,
            ..Settings::default()
        };
        let chars = build(&settings);

        assert_eq!(chars.len(), 26 + 10 + 29);
        assert!(chars.starts_with(UPPERCASE));
        assert_eq!(&chars[26..36], DIGITS);
        assert!(chars.ends_with(SYMBOLS));
        assert_eq!(size(&settings), chars.len());
    }

    #[test]
    fn build_empty_when_nothing_enabled() {
        let settings = Settings {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Settings::default()
        };
        assert!(build(&settings).is_empty());
        assert_eq!(size(&settings), 0);
    }
}
