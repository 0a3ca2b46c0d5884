//! Diff command implementation.

use crate::cli::DiffArgs;
use crate::error::convert_inspect_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use archscope_core::DiffSummary;
use archscope_core::diff_archives_with;
use tracing::debug;

pub fn execute(args: &DiffArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = args.reader.to_config();

    let entries = diff_archives_with(&args.left, &args.right, &config, convert_inspect_error)?;
    let summary = DiffSummary::from_entries(&entries);
    debug!(
        entries = entries.len(),
        changes = summary.total_changes(),
        "archives compared"
    );
    formatter.format_diff(&entries, &summary, args.all)?;

    Ok(())
}
