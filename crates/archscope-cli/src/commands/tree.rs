//! Tree command implementation.

use crate::cli::TreeArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use archscope_core::WalkOptions;
use archscope_core::read_tree;

pub fn execute(args: &TreeArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = args.reader.to_config();
    let tree = add_archive_context(read_tree(&args.archive, &config), &args.archive)?;

    let options = WalkOptions {
        max_depth: (args.level > 0).then_some(args.level),
        dirs_only: args.dirs_only,
    };
    formatter.format_tree(&args.archive, &tree, &options)?;

    Ok(())
}
