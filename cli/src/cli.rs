//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Spanview - slice and search text without copying it
#[derive(Parser, Debug)]
#[command(name = "spanview", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Read the text from a file instead of the command line ("-" for stdin)
    #[arg(long, short, global = true, value_name = "PATH")]
    pub input: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split the text around the first separator
    Split(SplitArgs),

    /// Print the index of a byte, or "npos" if absent
    Find(FindArgs),

    /// Count the occurrences of a byte
    Count(CountArgs),

    /// Print up to LEN bytes starting at START
    Substr(SubstrArgs),

    /// Print the bytes between START and END
    Slice(SliceArgs),

    /// Keep the first (or last) N bytes
    Take(EdgeArgs),

    /// Remove the first (or last) N bytes
    Drop(EdgeArgs),

    /// Compare two strings, printing -1, 0 or 1
    Compare(CompareArgs),

    /// Remove a prefix and/or a suffix when present
    Strip(StripArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// The text a command operates on.
#[derive(Args, Debug)]
pub struct TextArg {
    /// Text to operate on (defaults to the contents of --input)
    pub text: Option<String>,
}

/// Arguments for the `split` command.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Separator byte (a single character, or an escape like \t or \x2c)
    #[arg(long, short, value_parser = parse_byte)]
    pub sep: u8,

    #[command(flatten)]
    pub text: TextArg,
}

/// Arguments for the `find` command.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Byte to look for
    #[arg(value_parser = parse_byte)]
    pub byte: u8,

    #[command(flatten)]
    pub text: TextArg,

    /// Start position (forward search) or end position (reverse search)
    #[arg(long)]
    pub from: Option<usize>,

    /// Search backwards for the last occurrence
    #[arg(long, short)]
    pub reverse: bool,
}

/// Arguments for the `count` command.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Byte to count
    #[arg(value_parser = parse_byte)]
    pub byte: u8,

    #[command(flatten)]
    pub text: TextArg,
}

/// Arguments for the `substr` command.
#[derive(Args, Debug)]
pub struct SubstrArgs {
    /// Index of the first byte
    pub start: usize,

    #[command(flatten)]
    pub text: TextArg,

    /// Maximum number of bytes (defaults to all remaining)
    #[arg(long, short)]
    pub len: Option<usize>,
}

/// Arguments for the `slice` command.
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Index of the first byte
    pub start: usize,

    /// Index one past the last byte
    pub end: usize,

    #[command(flatten)]
    pub text: TextArg,
}

/// Arguments for the `take` and `drop` commands.
#[derive(Args, Debug)]
pub struct EdgeArgs {
    /// Number of bytes
    pub count: usize,

    #[command(flatten)]
    pub text: TextArg,

    /// Work on the end of the text instead of the start
    #[arg(long, short)]
    pub back: bool,
}

/// Arguments for the `compare` command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    pub lhs: String,
    pub rhs: String,
}

/// Arguments for the `strip` command.
#[derive(Args, Debug)]
pub struct StripArgs {
    #[command(flatten)]
    pub text: TextArg,

    /// Prefix to remove
    #[arg(long, short)]
    pub prefix: Option<String>,

    /// Suffix to remove
    #[arg(long, short)]
    pub suffix: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Parses a single byte: one ASCII character, or one of the escapes
/// `\n`, `\t`, `\r`, `\0`, `\\` and `\xNN`.
pub fn parse_byte(arg: &str) -> Result<u8, String> {
    match arg.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        [b'\\', b'n'] => Ok(b'\n'),
        [b'\\', b't'] => Ok(b'\t'),
        [b'\\', b'r'] => Ok(b'\r'),
        [b'\\', b'0'] => Ok(0),
        [b'\\', b'\\'] => Ok(b'\\'),
        [b'\\', b'x', hex @ ..] if hex.len() == 2 => {
            let hex = std::str::from_utf8(hex).map_err(|e| e.to_string())?;
            u8::from_str_radix(hex, 16).map_err(|_| format!("invalid hex escape `{arg}`"))
        }
        _ => Err(format!(
            "expected a single ASCII character or escape, got `{arg}`"
        )),
    }
}
