//! Shared terminal utilities.
//!
//! Themed box drawing, frame output, and the raw mode / alternate screen guard.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
