//! The `split` command - split text around the first separator.

use spanview::StringRef;

use crate::cli::SplitArgs;
use crate::common::{CliResult, input::resolve_text, output::print_line};

/// Run the split command.
///
/// Prints the part before the separator and the part after it on separate
/// lines. Without a separator the second line is empty.
pub fn run(args: SplitArgs, input: Option<&str>) -> CliResult<()> {
    let text = resolve_text(args.text.text, input)?;
    let view = StringRef::from(&text);
    tracing::debug!(len = view.len(), sep = args.sep, "split");

    let (left, right) = view.split(args.sep);
    print_line(left)?;
    print_line(right)?;
    Ok(())
}
