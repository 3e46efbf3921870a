use std::path::PathBuf;

use clap::Parser;

use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};

#[derive(Debug, Parser)]
#[command(name = "passgen", version, about = "Interactive password generator")]
pub struct CliFlags {
    /// Print one password and its strength instead of opening the widget
    #[arg(short, long)]
    pub print: bool,

    /// Password length for --print
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_LENGTH as i64)
    )]
    pub length: Option<u8>,

    /// Leave out uppercase letters (--print)
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters (--print)
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits (--print)
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols (--print)
    #[arg(long)]
    pub no_symbols: bool,

    /// Log file (default: passgen.log in the temp dir)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

impl CliFlags {
    /// Widget defaults adjusted by the --print flags.
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            length: self.length.map(usize::from).unwrap_or(defaults.length),
            include_uppercase: !self.no_upper,
            include_lowercase: !self.no_lower,
            include_numbers: !self.no_numbers,
            include_symbols: !self.no_symbols,
            ..defaults
        }
    }
}
