//! Panic handler for user-friendly crash reporting.

use std::panic::PanicHookInfo;

/// Install the custom panic handler.
///
/// This should be called early in main() before any other initialization.
pub fn install_handler() {
    std::panic::set_hook(Box::new(panic_hook));
}

fn panic_hook(info: &PanicHookInfo<'_>) {
    eprintln!("\nspanview crashed unexpectedly!\n");
    eprintln!("{info}");

    let command_line: Vec<String> = std::env::args().skip(1).collect();
    eprintln!("\nversion: {}", env!("CARGO_PKG_VERSION"));
    eprintln!("command line: spanview {}", command_line.join(" "));
}
