//! The `substr`, `slice`, `take` and `drop` commands.
//!
//! `substr`, `slice` and `take` clamp out-of-range positions. `drop` is the
//! only one with a precondition, so it goes through the checked variant and
//! reports an error instead of panicking.

use spanview::StringRef;

use crate::cli::{EdgeArgs, SliceArgs, SubstrArgs};
use crate::common::{CliResult, input::resolve_text, output::print_line};

/// Run the substr command.
pub fn substr(args: SubstrArgs, input: Option<&str>) -> CliResult<()> {
    let text = resolve_text(args.text.text, input)?;
    let view = StringRef::from(&text);
    tracing::debug!(len = view.len(), start = args.start, "substr");

    print_line(view.substr(args.start, args.len.unwrap_or(StringRef::NPOS)))?;
    Ok(())
}

/// Run the slice command.
pub fn slice(args: SliceArgs, input: Option<&str>) -> CliResult<()> {
    let text = resolve_text(args.text.text, input)?;
    let view = StringRef::from(&text);
    tracing::debug!(len = view.len(), start = args.start, end = args.end, "slice");

    print_line(view.slice(args.start, args.end))?;
    Ok(())
}

/// Run the take command.
pub fn take(args: EdgeArgs, input: Option<&str>) -> CliResult<()> {
    let text = resolve_text(args.text.text, input)?;
    let view = StringRef::from(&text);
    tracing::debug!(len = view.len(), count = args.count, back = args.back, "take");

    let kept = if args.back {
        view.take_back(args.count)
    } else {
        view.take_front(args.count)
    };
    print_line(kept)?;
    Ok(())
}

/// Run the drop command.
pub fn drop(args: EdgeArgs, input: Option<&str>) -> CliResult<()> {
    let text = resolve_text(args.text.text, input)?;
    let view = StringRef::from(&text);
    tracing::debug!(len = view.len(), count = args.count, back = args.back, "drop");

    let kept = if args.back {
        view.try_drop_back(args.count)?
    } else {
        view.try_drop_front(args.count)?
    };
    print_line(kept)?;
    Ok(())
}
