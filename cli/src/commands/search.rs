//! The `find` and `count` commands.

use spanview::StringRef;

use crate::cli::{CountArgs, FindArgs};
use crate::common::{CliResult, input::resolve_text, output::print_index};

/// Run the find command.
pub fn find(args: FindArgs, input: Option<&str>) -> CliResult<()> {
    let text = resolve_text(args.text.text, input)?;
    let view = StringRef::from(&text);
    tracing::debug!(len = view.len(), byte = args.byte, reverse = args.reverse, "find");

    let index = if args.reverse {
        view.rfind(args.byte, args.from.unwrap_or(StringRef::NPOS))
    } else {
        view.find(args.byte, args.from.unwrap_or(0))
    };
    print_index(index);
    Ok(())
}

/// Run the count command.
pub fn count(args: CountArgs, input: Option<&str>) -> CliResult<()> {
    let text = resolve_text(args.text.text, input)?;
    let view = StringRef::from(&text);
    tracing::debug!(len = view.len(), byte = args.byte, "count");

    println!("{}", view.count(args.byte));
    Ok(())
}
