//! Heuristic strength rating.
//!
//! Four independent checks, one point each: at least 8 characters, an ASCII
//! uppercase letter, an ASCII digit, and a character outside `[A-Za-z0-9]`.
//! Lowercase letters earn nothing and length only counts once.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    TooShort,
    Weak,
    Medium,
    Strong,
}

/// Indicator color for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthColor {
    Green,
    Yellow,
    Red,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Strength::TooShort,
            1 => Strength::Weak,
            2 => Strength::Medium,
            _ => Strength::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::TooShort => "Too Short",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            Strength::Strong => StrengthColor::Green,
            Strength::Medium => StrengthColor::Yellow,
            _ => StrengthColor::Red,
        }
    }
}

/// Count satisfied checks, 0..=4.
pub fn score(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|&&hit| hit).count() as u8
}

pub fn rate(password: &str) -> Strength {
    Strength::from_score(score(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, Strength::TooShort)]
    #[case("abcdefg", 0, Strength::TooShort)]
    #[case("abcdefgh", 1, Strength::Weak)]
    #[case("Abcdefgh", 2, Strength::Medium)]
    #[case("Abcdefg1", 3, Strength::Strong)]
    #[case("Abc!efg1", 4, Strength::Strong)]
    #[case("A1!", 3, Strength::Strong)]
    #[case("!!", 1, Strength::Weak)]
    fn rates_known_passwords(#[case] password: &str, #[case] expected_score: u8, #[case] expected: Strength) {
        assert_eq!(score(password), expected_score);
        assert_eq!(rate(password), expected);
    }

    #[test]
    fn lowercase_earns_nothing() {
        assert_eq!(score("abc"), 0);
    }

    #[test]
    fn non_ascii_letters_count_as_symbols() {
        assert_eq!(score("é"), 1);
    }

    #[rstest]
    #[case(Strength::Strong, StrengthColor::Green)]
    #[case(Strength::Medium, StrengthColor::Yellow)]
    #[case(Strength::Weak, StrengthColor::Red)]
    #[case(Strength::TooShort, StrengthColor::Red)]
    fn colors(#[case] strength: Strength, #[case] color: StrengthColor) {
        assert_eq!(strength.color(), color);
    }

    #[test]
    fn labels() {
        assert_eq!(Strength::TooShort.label(), "Too Short");
        assert_eq!(Strength::from_score(4).label(), "Strong");
    }
}
