//! The `strip` command - remove a prefix and/or suffix when present.

use spanview::StringRef;

use crate::cli::StripArgs;
use crate::common::{CliResult, input::resolve_text, output::print_line};

/// Run the strip command.
///
/// Prints what remains, then one line per requested affix saying whether
/// it was removed.
pub fn run(args: StripArgs, input: Option<&str>) -> CliResult<()> {
    let text = resolve_text(args.text.text, input)?;
    let mut view = StringRef::from(&text);
    tracing::debug!(len = view.len(), "strip");

    let prefix_removed = args.prefix.as_deref().map(|p| view.consume_front(p));
    let suffix_removed = args.suffix.as_deref().map(|s| view.consume_back(s));

    print_line(view)?;
    if let Some(removed) = prefix_removed {
        println!("prefix removed: {removed}");
    }
    if let Some(removed) = suffix_removed {
        println!("suffix removed: {removed}");
    }
    Ok(())
}
