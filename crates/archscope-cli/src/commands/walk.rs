//! Walk command implementation.

use crate::cli::WalkArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use archscope_core::DirListing;
use archscope_core::read_tree;

pub fn execute(args: &WalkArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = args.reader.to_config();
    let tree = add_archive_context(read_tree(&args.archive, &config), &args.archive)?;

    let listings: Vec<DirListing> = tree.walk().collect();
    formatter.format_walk(&listings)?;

    Ok(())
}
