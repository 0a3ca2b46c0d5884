//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use archscope_core::DiffEntry;
use archscope_core::DiffSummary;
use archscope_core::DirListing;
use archscope_core::EntryMetadata;
use archscope_core::EntryPath;
use archscope_core::StatusCounts;
use archscope_core::Tree;
use archscope_core::TreeNode;
use archscope_core::WalkOptions;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct MetadataOutput {
    size: u64,
    compressed_size: u64,
    checksum: String,
    compression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<String>,
}

impl From<&EntryMetadata> for MetadataOutput {
    fn from(metadata: &EntryMetadata) -> Self {
        Self {
            size: metadata.uncompressed_size,
            compressed_size: metadata.compressed_size,
            checksum: format!("{:08x}", metadata.checksum),
            compression: metadata.compression.to_string(),
            modified: metadata
                .modified
                .map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct NodeOutput {
    name: String,
    kind: &'static str,
    synthesized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<MetadataOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Self>,
}

impl NodeOutput {
    /// Converts `node` and its children, honouring depth and directory-only
    /// limits.
    fn build(node: &TreeNode, depth: usize, options: &WalkOptions) -> Self {
        let children = if options.max_depth.is_some_and(|max| depth >= max) {
            Vec::new()
        } else {
            node.children()
                .filter(|c| !options.dirs_only || c.is_directory())
                .map(|c| Self::build(c, depth + 1, options))
                .collect()
        };

        Self {
            name: node.name().to_string(),
            kind: node.kind().as_str(),
            synthesized: node.is_synthesized(),
            metadata: node.metadata().map(MetadataOutput::from),
            children,
        }
    }
}

#[derive(Debug, Serialize)]
struct CountsOutput {
    files: usize,
    directories: usize,
}

impl From<StatusCounts> for CountsOutput {
    fn from(counts: StatusCounts) -> Self {
        Self {
            files: counts.files,
            directories: counts.directories,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_tree(&self, archive: &Path, tree: &Tree, options: &WalkOptions) -> Result<()> {
        #[derive(Serialize)]
        struct TreeOutput {
            archive: String,
            files: usize,
            directories: usize,
            synthesized_directories: usize,
            total_size: u64,
            total_compressed_size: u64,
            root: NodeOutput,
        }

        let stats = tree.stats();
        let data = TreeOutput {
            archive: archive.display().to_string(),
            files: stats.files,
            directories: stats.directories,
            synthesized_directories: stats.synthesized_directories,
            total_size: stats.total_size,
            total_compressed_size: stats.total_compressed_size,
            root: NodeOutput::build(tree.root(), 0, options),
        };

        Self::output(&JsonOutput::success("tree", data))
    }

    fn format_content(
        &self,
        base: &EntryPath,
        entries: &[(EntryPath, &TreeNode)],
        _long: bool,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct ContentEntry {
            path: String,
            kind: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            metadata: Option<MetadataOutput>,
        }

        #[derive(Serialize)]
        struct ContentOutput {
            base: String,
            entries: Vec<ContentEntry>,
        }

        let data = ContentOutput {
            base: base.to_string(),
            entries: entries
                .iter()
                .map(|(path, node)| ContentEntry {
                    path: path.to_string(),
                    kind: node.kind().as_str(),
                    metadata: node.metadata().map(MetadataOutput::from),
                })
                .collect(),
        };

        Self::output(&JsonOutput::success("content", data))
    }

    fn format_diff(
        &self,
        entries: &[DiffEntry],
        summary: &DiffSummary,
        show_all: bool,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct DiffEntryOutput {
            path: String,
            kind: &'static str,
            status: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            left: Option<MetadataOutput>,
            #[serde(skip_serializing_if = "Option::is_none")]
            right: Option<MetadataOutput>,
        }

        #[derive(Serialize)]
        struct SummaryOutput {
            identical: bool,
            added: CountsOutput,
            removed: CountsOutput,
            modified: CountsOutput,
            unchanged: CountsOutput,
        }

        #[derive(Serialize)]
        struct DiffOutput {
            entries: Vec<DiffEntryOutput>,
            summary: SummaryOutput,
        }

        let data = DiffOutput {
            entries: entries
                .iter()
                .filter(|e| show_all || e.is_change())
                .map(|e| DiffEntryOutput {
                    path: e.path.to_string(),
                    kind: e.kind.as_str(),
                    status: e.status.as_str(),
                    left: e.left.as_ref().map(MetadataOutput::from),
                    right: e.right.as_ref().map(MetadataOutput::from),
                })
                .collect(),
            summary: SummaryOutput {
                identical: summary.is_identical(),
                added: summary.added.into(),
                removed: summary.removed.into(),
                modified: summary.modified.into(),
                unchanged: summary.unchanged.into(),
            },
        };

        Self::output(&JsonOutput::success("diff", data))
    }

    fn format_walk(&self, listings: &[DirListing]) -> Result<()> {
        #[derive(Serialize)]
        struct WalkEntry<'a> {
            path: String,
            directories: &'a [String],
            files: &'a [String],
        }

        let data: Vec<WalkEntry<'_>> = listings
            .iter()
            .map(|l| WalkEntry {
                path: l.path.to_string(),
                directories: &l.directories,
                files: &l.files,
            })
            .collect();

        Self::output(&JsonOutput::success("walk", data))
    }
}
