use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

pub const DEFAULT_ALPHABET: &str = "base64";

#[derive(Parser, Debug)]
#[command(name = "alphabase")]
#[command(version)]
#[command(about = "Encode and decode binary data with base64, base32, hex and custom alphabets", long_about = None)]
pub struct Cli {
    /// Named alphabet to use (default: base64)
    #[arg(short, long, value_name = "NAME", conflicts_with = "custom")]
    pub alphabet: Option<String>,

    /// Use these characters as an ad-hoc alphabet (2, 4, 8, 16, 32 or 64 of them)
    #[arg(long, value_name = "CHARS")]
    pub custom: Option<String>,

    /// Padding character for --custom
    #[arg(long, value_name = "CHAR", requires = "custom")]
    pub padding: Option<char>,

    /// Decode --custom input ignoring case
    #[arg(long, requires = "custom")]
    pub case_insensitive: bool,

    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    pub decode: bool,

    /// List available alphabets
    #[arg(short, long)]
    pub list: bool,

    /// Extra alphabet definitions (TOML), applied after the standard locations
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn alphabet_name(&self) -> &str {
        self.alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET)
    }
}
