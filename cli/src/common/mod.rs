//! Common utilities shared across CLI commands.

pub mod error;
pub mod input;
pub mod output;
pub mod panic;

pub use error::CliResult;
