//! Spanview CLI - slice and search text without copying it.

mod cli;
mod commands;
mod common;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    // Install panic handler for user-friendly crash reporting
    common::panic::install_handler();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let input = cli.input.as_deref();

    let result = match cli.command {
        Command::Split(args) => commands::split::run(args, input),
        Command::Find(args) => commands::search::find(args, input),
        Command::Count(args) => commands::search::count(args, input),
        Command::Substr(args) => commands::extract::substr(args, input),
        Command::Slice(args) => commands::extract::slice(args, input),
        Command::Take(args) => commands::extract::take(args, input),
        Command::Drop(args) => commands::extract::drop(args, input),
        Command::Compare(args) => commands::compare::run(args),
        Command::Strip(args) => commands::strip::run(args, input),
        Command::Completions(args) => {
            commands::completions::run(args);
            Ok(())
        }
    };

    if let Err(e) = result {
        common::error::render_and_exit(e);
    }
}
