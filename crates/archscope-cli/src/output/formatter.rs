//! Output formatter trait for CLI results.

use anyhow::Result;
use archscope_core::DiffEntry;
use archscope_core::DiffSummary;
use archscope_core::DirListing;
use archscope_core::EntryPath;
use archscope_core::Tree;
use archscope_core::TreeNode;
use archscope_core::WalkOptions;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the hierarchy of one archive
    fn format_tree(&self, archive: &Path, tree: &Tree, options: &WalkOptions) -> Result<()>;

    /// Format a flat listing of entries below `base`
    fn format_content(
        &self,
        base: &EntryPath,
        entries: &[(EntryPath, &TreeNode)],
        long: bool,
    ) -> Result<()>;

    /// Format a diff result
    fn format_diff(&self, entries: &[DiffEntry], summary: &DiffSummary, show_all: bool)
    -> Result<()>;

    /// Format per-directory listings
    fn format_walk(&self, listings: &[DirListing]) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
