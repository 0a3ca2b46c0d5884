//! Hierarchical archive trees.
//!
//! A [`Tree`] is built once from a [`Catalog`](crate::Catalog) in a single
//! mutable pass and is read-only afterwards. Every proper prefix of every file
//! path is a directory node, whether or not the archive stored a record for
//! it.
//!
//! # Examples
//!
//! ```
//! use archscope_core::RawEntry;
//! use archscope_core::build_tree;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = build_tree(vec![
//!     RawEntry::file("docs/readme.txt", 100, 0xAA),
//!     RawEntry::file("docs/api/index.html", 2048, 0xBB),
//! ])?;
//!
//! let stats = tree.stats();
//! assert_eq!(stats.files, 2);
//! assert_eq!(stats.synthesized_directories, 2);
//! assert_eq!(stats.total_size, 2148);
//! # Ok(())
//! # }
//! ```

mod builder;
mod node;
mod walk;

pub use node::TreeNode;
pub use node::WalkOptions;
pub use walk::DirListing;
pub use walk::Walk;

/// Immutable directory/file hierarchy of one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: TreeNode,
}

impl Tree {
    /// Returns the synthetic root directory (empty name, no metadata).
    #[must_use]
    pub const fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Iterates over every directory, parents first, siblings in name order.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.root)
    }

    /// Computes entry counts and sizes over the whole tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for (_, node) in self.root.descendants(&WalkOptions::default()) {
            match (node.kind().is_file(), node.metadata()) {
                (true, Some(metadata)) => {
                    stats.files += 1;
                    stats.total_size = stats.total_size.saturating_add(metadata.uncompressed_size);
                    stats.total_compressed_size = stats
                        .total_compressed_size
                        .saturating_add(metadata.compressed_size);
                }
                (true, None) => stats.files += 1,
                (false, Some(_)) => stats.directories += 1,
                (false, None) => stats.synthesized_directories += 1,
            }
        }
        stats
    }
}

/// Summary counts of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of file nodes.
    pub files: usize,

    /// Number of directories backed by an explicit archive record.
    pub directories: usize,

    /// Number of directories synthesized from file path prefixes.
    pub synthesized_directories: usize,

    /// Sum of uncompressed file sizes in bytes.
    pub total_size: u64,

    /// Sum of compressed file sizes in bytes.
    pub total_compressed_size: u64,
}

impl TreeStats {
    /// Returns the number of directories of either origin.
    #[must_use]
    pub const fn total_directories(&self) -> usize {
        self.directories + self.synthesized_directories
    }
}
