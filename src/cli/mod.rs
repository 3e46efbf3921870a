//! Command-line surface: process flags and the headless print mode.

mod flags;
pub mod prompts;
pub mod tty;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;

use crate::pass;

pub use flags::CliFlags;

/// Print one password to stdout and its strength to stderr.
pub fn print(flags: &CliFlags) -> Result<ExitCode> {
    let mut rng = SmallRng::from_entropy();
    let printed = print_to(flags, &mut io::stdout().lock(), &mut rng)?;
    if !printed {
        prompts::no_class_enabled();
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Returns false, with nothing written, when every class is disabled.
fn print_to<W: Write, R: Rng>(flags: &CliFlags, out: &mut W, rng: &mut R) -> Result<bool> {
    let settings = flags.settings();
    let Some(password) = pass::generate(&settings, rng) else {
        return Ok(false);
    };

    write_password(out, &password).context("failed to write password")?;
    eprintln!("Strength: {}", pass::rate(&password).label());
    tracing::info!(length = settings.length, "printed password");
    Ok(true)
}

fn write_password<W: Write>(out: &mut W, password: &str) -> io::Result<()> {
    out.write_all(password.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rand::rngs::StdRng;

    fn flags(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn all_classes_disabled_prints_nothing() {
        let flags = flags(&[
            "--print",
            "--no-upper",
            "--no-lower",
            "--no-numbers",
            "--no-symbols",
        ]);
        let mut out = Vec::new();
        let printed = print_to(&flags, &mut out, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(!printed);
        assert!(out.is_empty());
    }

    #[test]
    fn print_writes_one_password_of_requested_length() {
        let flags = flags(&["--print", "-l", "16", "--no-symbols"]);
        let mut out = Vec::new();
        let printed = print_to(&flags, &mut out, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(printed);

        let text = String::from_utf8(out).unwrap();
        let line = text.strip_suffix('\n').unwrap();
        assert_eq!(line.len(), 16);
        assert!(line.bytes().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn password_is_written_as_one_line() {
        let mut out = Vec::new();
        write_password(&mut out, "Abc!efg1").unwrap();
        assert_eq!(out, b"Abc!efg1\n");
    }
}
