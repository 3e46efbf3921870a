//! Password generation and strength rating.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::CharClass;
pub use generate::generate;
pub use strength::{Strength, StrengthColor, rate};
