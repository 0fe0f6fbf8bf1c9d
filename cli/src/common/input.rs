//! Input utilities.

use std::io::Read;

use super::error::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
///
/// Returns the raw bytes; nothing here assumes UTF-8.
pub fn read_input(path: &str) -> CliResult<Vec<u8>> {
    let io_err = |source: std::io::Error| CliError::Io {
        path: if is_stdin(path) { "<stdin>" } else { path }.to_string(),
        source,
    };
    if is_stdin(path) {
        let mut content = Vec::new();
        std::io::stdin().read_to_end(&mut content).map_err(io_err)?;
        Ok(content)
    } else {
        std::fs::read(path).map_err(io_err)
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

/// The text a command operates on: the positional argument if given,
/// otherwise the contents of `--input`.
pub fn resolve_text(text: Option<String>, input: Option<&str>) -> CliResult<Vec<u8>> {
    match (text, input) {
        (Some(text), Some(path)) => {
            tracing::warn!(path, "both TEXT and --input given; using TEXT");
            Ok(text.into_bytes())
        }
        (Some(text), None) => Ok(text.into_bytes()),
        (None, Some(path)) => read_input(path),
        (None, None) => Err(CliError::MissingText),
    }
}
