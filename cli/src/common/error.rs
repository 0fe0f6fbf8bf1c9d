//! Error handling utilities for the CLI.

use spanview::ViewError;
use thiserror::Error;

/// Errors a command can report to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// A checked view operation refused its arguments.
    #[error(transparent)]
    View(#[from] ViewError),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("no text given; pass TEXT or --input <PATH>")]
    MissingText,
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}
