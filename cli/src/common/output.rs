//! Writing views to stdout.

use std::io::{self, Write};

use spanview::StringRef;

/// Writes the bytes of `s` verbatim, followed by a newline.
pub fn print_line(s: StringRef<'_>) -> io::Result<()> {
    let mut line = Vec::with_capacity(s.len() + 1);
    line += s;
    line.push(b'\n');
    io::stdout().lock().write_all(&line)
}

/// Prints a search result, spelling the not-found sentinel as `npos`.
pub fn print_index(index: usize) {
    if index == StringRef::NPOS {
        println!("npos");
    } else {
        println!("{index}");
    }
}
