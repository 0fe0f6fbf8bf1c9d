//! The `compare` command - three-way byte comparison.

use spanview::StringRef;

use crate::cli::CompareArgs;
use crate::common::CliResult;

/// Run the compare command.
pub fn run(args: CompareArgs) -> CliResult<()> {
    let lhs = StringRef::from(&args.lhs);
    let rhs = StringRef::from(&args.rhs);
    tracing::debug!(%lhs, %rhs, "compare");

    println!("{}", lhs.compare(rhs));
    Ok(())
}
