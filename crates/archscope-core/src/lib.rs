//! Archive structure model and structural diff engine.
//!
//! `archscope-core` turns the flat entry listing of an archive (zip, tar and
//! compressed tar) into a validated directory tree, resolves paths inside it,
//! and compares two trees entry by entry. Nothing is ever extracted to disk.
//!
//! The pipeline is:
//!
//! 1. [`list_entries`] reads raw records from an archive file.
//! 2. [`Catalog::build`] normalizes names and rejects duplicates.
//! 3. [`Tree::build`] synthesizes missing directories and rejects
//!    file/directory conflicts.
//! 4. [`resolve`] and [`diff`] answer questions about finished trees.
//!
//! # Examples
//!
//! ```no_run
//! use archscope_core::DiffSummary;
//! use archscope_core::ReaderConfig;
//! use archscope_core::diff_archives;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReaderConfig::default();
//! let entries = diff_archives("release-1.0.tar.gz", "release-1.1.tar.gz", &config)?;
//! for entry in entries.iter().filter(|e| e.is_change()) {
//!     println!("{:>9} {}", entry.status, entry.path);
//! }
//! println!("{} changes", DiffSummary::from_entries(&entries).total_changes());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod diff;
pub mod error;
pub mod formats;
pub mod inspection;
pub mod io;
pub mod resolve;
pub mod tree;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export main API
pub use api::build_tree;
pub use api::diff_archives;
pub use api::diff_archives_with;
pub use api::read_tree;
pub use catalog::ArchiveEntry;
pub use catalog::Catalog;
pub use catalog::RawEntry;
pub use config::ReaderConfig;
pub use diff::DiffEntry;
pub use diff::DiffStatus;
pub use diff::DiffSummary;
pub use diff::StatusCounts;
pub use diff::diff;
pub use error::InspectError;
pub use error::QuotaResource;
pub use error::Result;
pub use inspection::list_entries;
pub use resolve::resolve;
pub use resolve::split_subpath;
pub use tree::DirListing;
pub use tree::Tree;
pub use tree::TreeNode;
pub use tree::TreeStats;
pub use tree::WalkOptions;

// Re-export types module for easier access
pub use types::CompressionMethod;
pub use types::EntryMetadata;
pub use types::EntryPath;
pub use types::NodeKind;
