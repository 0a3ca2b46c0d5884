//! Content command implementation.

use crate::cli::ContentArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use archscope_core::EntryPath;
use archscope_core::WalkOptions;
use archscope_core::read_tree;
use archscope_core::resolve;
use archscope_core::split_subpath;
use tracing::debug;

pub fn execute(args: &ContentArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = args.reader.to_config();
    let tree = add_archive_context(read_tree(&args.archive, &config), &args.archive)?;

    let segments = args.subpath.as_deref().map(split_subpath).unwrap_or_default();
    let node = add_archive_context(resolve(&tree, &segments), &args.archive)?;
    let base = EntryPath::from_segments(segments);
    debug!(%base, kind = %node.kind(), "sub-path resolved");

    // A file lists as itself; a directory lists everything below it.
    let entries = if node.is_file() {
        vec![(base.clone(), node)]
    } else {
        node.descendants(&WalkOptions::default())
            .into_iter()
            .map(|(relative, child)| {
                let full = relative
                    .segments()
                    .iter()
                    .fold(base.clone(), |path, segment| path.join(segment));
                (full, child)
            })
            .collect()
    };

    formatter.format_content(&base, &entries, args.long)?;

    Ok(())
}
