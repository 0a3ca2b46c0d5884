//! Structural comparison of two archive trees.
//!
//! The diff engine pairs two trees path by path and classifies every path
//! found in either of them. Files are compared by content fingerprint
//! (uncompressed size and checksum); directories get a status derived from
//! their descendants.
//!
//! # Examples
//!
//! ```
//! use archscope_core::DiffStatus;
//! use archscope_core::DiffSummary;
//! use archscope_core::RawEntry;
//! use archscope_core::build_tree;
//! use archscope_core::diff;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let left = build_tree(vec![RawEntry::file("docs/readme.txt", 100, 0xAA)])?;
//! let right = build_tree(vec![
//!     RawEntry::file("docs/readme.txt", 100, 0xAA),
//!     RawEntry::file("docs/notes.txt", 20, 0xBB),
//! ])?;
//!
//! let entries = diff(&left, &right);
//! let rendered: Vec<String> = entries
//!     .iter()
//!     .map(|e| format!("{} {}", e.status, e.path))
//!     .collect();
//! assert_eq!(
//!     rendered,
//!     [
//!         "modified docs",
//!         "added docs/notes.txt",
//!         "unchanged docs/readme.txt",
//!     ]
//! );
//!
//! let summary = DiffSummary::from_entries(&entries);
//! assert_eq!(summary.added.files, 1);
//! assert!(!summary.is_identical());
//! # Ok(())
//! # }
//! ```

mod engine;

use std::fmt;

pub use engine::diff;

use crate::types::EntryMetadata;
use crate::types::EntryPath;
use crate::types::NodeKind;

/// Classification of one path in a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffStatus {
    /// Present only in the right tree.
    Added,
    /// Present only in the left tree.
    Removed,
    /// Present in both with different content (files) or changed
    /// descendants (directories).
    Modified,
    /// Present in both with identical content.
    Unchanged,
}

impl DiffStatus {
    /// Returns the lowercase name used in messages and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
            Self::Unchanged => "unchanged",
        }
    }

    /// Returns the status seen from the other side.
    ///
    /// Swapping the two trees of a diff swaps Added and Removed.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Added => Self::Removed,
            Self::Removed => Self::Added,
            other => other,
        }
    }
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result for one path of a diff.
///
/// Holds copies of the metadata of both sides; nothing refers back into the
/// compared trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    /// Path of the node.
    pub path: EntryPath,

    /// Kind of the node. For a kind change the same path appears twice,
    /// once Removed with the old kind and once Added with the new kind.
    pub kind: NodeKind,

    /// Classification.
    pub status: DiffStatus,

    /// Metadata on the left side, if the node exists there and has any.
    pub left: Option<EntryMetadata>,

    /// Metadata on the right side, if the node exists there and has any.
    pub right: Option<EntryMetadata>,
}

impl DiffEntry {
    /// Returns `true` unless the entry is Unchanged.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.status != DiffStatus::Unchanged
    }
}

/// File and directory counts for one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Number of file entries.
    pub files: usize,
    /// Number of directory entries.
    pub directories: usize,
}

impl StatusCounts {
    /// Returns files plus directories.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.files + self.directories
    }

    fn record(&mut self, kind: NodeKind) {
        match kind {
            NodeKind::File => self.files += 1,
            NodeKind::Directory => self.directories += 1,
        }
    }
}

/// Per-status counts over a diff result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    /// Added entries.
    pub added: StatusCounts,
    /// Removed entries.
    pub removed: StatusCounts,
    /// Modified entries.
    pub modified: StatusCounts,
    /// Unchanged entries.
    pub unchanged: StatusCounts,
}

impl DiffSummary {
    /// Tallies a diff result.
    #[must_use]
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            let counts = match entry.status {
                DiffStatus::Added => &mut summary.added,
                DiffStatus::Removed => &mut summary.removed,
                DiffStatus::Modified => &mut summary.modified,
                DiffStatus::Unchanged => &mut summary.unchanged,
            };
            counts.record(entry.kind);
        }
        summary
    }

    /// Returns the number of entries that are not Unchanged.
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.added.total() + self.removed.total() + self.modified.total()
    }

    /// Returns `true` if both trees hold the same paths with the same content.
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.total_changes() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &[&str], kind: NodeKind, status: DiffStatus) -> DiffEntry {
        DiffEntry {
            path: EntryPath::from_segments(path.iter().copied()),
            kind,
            status,
            left: None,
            right: None,
        }
    }

    #[test]
    fn test_status_display() {
        assert_eq!(DiffStatus::Added.to_string(), "added");
        assert_eq!(DiffStatus::Removed.to_string(), "removed");
        assert_eq!(DiffStatus::Modified.to_string(), "modified");
        assert_eq!(DiffStatus::Unchanged.to_string(), "unchanged");
    }

    #[test]
    fn test_status_inverse() {
        assert_eq!(DiffStatus::Added.inverse(), DiffStatus::Removed);
        assert_eq!(DiffStatus::Removed.inverse(), DiffStatus::Added);
        assert_eq!(DiffStatus::Modified.inverse(), DiffStatus::Modified);
        assert_eq!(DiffStatus::Unchanged.inverse(), DiffStatus::Unchanged);
    }

    #[test]
    fn test_summary_counts() {
        let entries = vec![
            entry(&["a"], NodeKind::Directory, DiffStatus::Modified),
            entry(&["a", "x"], NodeKind::File, DiffStatus::Added),
            entry(&["a", "y"], NodeKind::File, DiffStatus::Unchanged),
            entry(&["b"], NodeKind::Directory, DiffStatus::Removed),
            entry(&["b", "z"], NodeKind::File, DiffStatus::Removed),
        ];
        let summary = DiffSummary::from_entries(&entries);
        assert_eq!(summary.added, StatusCounts { files: 1, directories: 0 });
        assert_eq!(summary.removed, StatusCounts { files: 1, directories: 1 });
        assert_eq!(summary.modified, StatusCounts { files: 0, directories: 1 });
        assert_eq!(summary.unchanged.total(), 1);
        assert_eq!(summary.total_changes(), 4);
        assert!(!summary.is_identical());
    }

    #[test]
    fn test_summary_empty_is_identical() {
        assert!(DiffSummary::from_entries(&[]).is_identical());
    }

    #[test]
    fn test_is_change() {
        assert!(entry(&["a"], NodeKind::File, DiffStatus::Modified).is_change());
        assert!(!entry(&["a"], NodeKind::File, DiffStatus::Unchanged).is_change());
    }
}
