//! Tree construction from a catalog.

use std::collections::btree_map::Entry;

use tracing::debug;
use tracing::trace;

use super::Tree;
use super::TreeNode;
use crate::InspectError;
use crate::Result;
use crate::catalog::ArchiveEntry;
use crate::catalog::Catalog;
use crate::types::EntryPath;
use crate::types::NodeKind;

impl Tree {
    /// Builds the hierarchical tree implied by a catalog.
    ///
    /// Directories missing from the listing are synthesized for every prefix
    /// of every entry. An explicit directory record arriving after its
    /// directory was synthesized attaches its metadata to the existing node.
    ///
    /// # Errors
    ///
    /// Returns `InspectError::PathKindConflict` if a path is needed both as a
    /// file and as a directory. No partial tree is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use archscope_core::Catalog;
    /// use archscope_core::InspectError;
    /// use archscope_core::RawEntry;
    /// use archscope_core::Tree;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let catalog = Catalog::build(vec![RawEntry::file("a/b/c.txt", 3, 7)])?;
    /// let tree = Tree::build(&catalog)?;
    /// let a = tree.root().child("a").unwrap();
    /// assert!(a.is_synthesized());
    ///
    /// let conflicting = Catalog::build(vec![
    ///     RawEntry::file("a/b", 1, 1),
    ///     RawEntry::directory("a/b/"),
    /// ])?;
    /// assert!(matches!(
    ///     Tree::build(&conflicting),
    ///     Err(InspectError::PathKindConflict { .. })
    /// ));
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let mut root = TreeNode::directory("", None);
        let mut synthesized = 0_usize;

        for entry in catalog.entries() {
            insert(&mut root, entry, &mut synthesized)?;
        }

        debug!(
            entries = catalog.len(),
            synthesized_directories = synthesized,
            "tree built"
        );
        Ok(Self { root })
    }
}

fn insert(root: &mut TreeNode, entry: &ArchiveEntry, synthesized: &mut usize) -> Result<()> {
    let segments = entry.path.segments();
    let Some((last, prefix)) = segments.split_last() else {
        return Err(InspectError::InvalidPath {
            path: entry.path.to_string(),
            reason: "empty path",
        });
    };

    let mut node = root;
    for (depth, segment) in prefix.iter().enumerate() {
        node = node
            .children
            .entry(segment.clone())
            .or_insert_with(|| {
                *synthesized += 1;
                trace!(name = %segment, depth, "synthesized directory");
                TreeNode::directory(segment, None)
            });

        if node.is_file() {
            return Err(InspectError::PathKindConflict {
                path: EntryPath::from_segments(&segments[..=depth]),
                existing: NodeKind::File,
                requested: NodeKind::Directory,
            });
        }
    }

    match node.children.entry(last.clone()) {
        Entry::Vacant(slot) => {
            let child = if entry.is_explicit_directory {
                TreeNode::directory(last, Some(entry.metadata.clone()))
            } else {
                TreeNode::file(last, entry.metadata.clone())
            };
            slot.insert(child);
        }
        Entry::Occupied(slot) => {
            let existing = slot.into_mut();
            if entry.is_explicit_directory && existing.is_directory() {
                trace!(path = %entry.path, "attached metadata to synthesized directory");
                existing.metadata = Some(entry.metadata.clone());
            } else {
                return Err(InspectError::PathKindConflict {
                    path: entry.path.clone(),
                    existing: existing.kind(),
                    requested: if entry.is_explicit_directory {
                        NodeKind::Directory
                    } else {
                        NodeKind::File
                    },
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::RawEntry;

    fn build(raw: Vec<RawEntry>) -> Result<Tree> {
        Tree::build(&Catalog::build(raw)?)
    }

    #[test]
    fn test_empty_catalog_gives_bare_root() {
        let tree = build(Vec::new()).unwrap();
        assert_eq!(tree.root().name(), "");
        assert!(tree.root().is_directory());
        assert_eq!(tree.root().child_count(), 0);
    }

    #[test]
    fn test_synthesizes_missing_directories() {
        let tree = build(vec![RawEntry::file("a/b/c.txt", 3, 7)]).unwrap();
        let a = tree.root().child("a").unwrap();
        let b = a.child("b").unwrap();
        let c = b.child("c.txt").unwrap();

        assert!(a.is_synthesized());
        assert!(b.is_synthesized());
        assert!(c.is_file());
        assert_eq!(c.metadata().unwrap().uncompressed_size, 3);
    }

    #[test]
    fn test_explicit_directory_keeps_metadata() {
        let tree = build(vec![
            RawEntry::directory("docs/"),
            RawEntry::file("docs/readme.txt", 100, 0xAA),
        ])
        .unwrap();
        let docs = tree.root().child("docs").unwrap();
        assert!(docs.is_directory());
        assert!(!docs.is_synthesized());
        assert!(docs.metadata().is_some());
    }

    #[test]
    fn test_late_directory_record_attaches_metadata() {
        let tree = build(vec![
            RawEntry::file("docs/readme.txt", 100, 0xAA),
            RawEntry::directory("docs/"),
        ])
        .unwrap();
        let docs = tree.root().child("docs").unwrap();
        assert!(!docs.is_synthesized());
        assert_eq!(docs.child_count(), 1);
    }

    #[test]
    fn test_file_then_directory_conflict() {
        let err = build(vec![RawEntry::file("a/b", 1, 1), RawEntry::directory("a/b/")]).unwrap_err();
        match err {
            InspectError::PathKindConflict {
                path,
                existing,
                requested,
            } => {
                assert_eq!(path.to_string(), "a/b");
                assert_eq!(existing, NodeKind::File);
                assert_eq!(requested, NodeKind::Directory);
            }
            other => panic!("expected PathKindConflict, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_then_file_conflict() {
        let err = build(vec![RawEntry::directory("a/b/"), RawEntry::file("a/b", 1, 1)]).unwrap_err();
        assert!(matches!(
            err,
            InspectError::PathKindConflict {
                existing: NodeKind::Directory,
                requested: NodeKind::File,
                ..
            }
        ));
    }

    #[test]
    fn test_file_used_as_prefix_conflict() {
        let err = build(vec![
            RawEntry::file("a/b", 1, 1),
            RawEntry::file("a/b/c.txt", 1, 1),
        ])
        .unwrap_err();
        match err {
            InspectError::PathKindConflict { path, existing, .. } => {
                assert_eq!(path.to_string(), "a/b");
                assert_eq!(existing, NodeKind::File);
            }
            other => panic!("expected PathKindConflict, got {other:?}"),
        }
    }

    #[test]
    fn test_file_over_synthesized_directory_conflict() {
        let err = build(vec![
            RawEntry::file("a/b/c.txt", 1, 1),
            RawEntry::file("a/b", 1, 1),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            InspectError::PathKindConflict {
                existing: NodeKind::Directory,
                requested: NodeKind::File,
                ..
            }
        ));
    }

    #[test]
    fn test_children_sorted_regardless_of_order() {
        let tree = build(vec![
            RawEntry::file("c.txt", 1, 1),
            RawEntry::file("a.txt", 1, 1),
            RawEntry::file("b/x.txt", 1, 1),
        ])
        .unwrap();
        let names: Vec<&str> = tree.root().children().map(TreeNode::name).collect();
        assert_eq!(names, ["a.txt", "b", "c.txt"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let tree = build(vec![
            RawEntry::file("Readme.md", 1, 1),
            RawEntry::file("readme.md", 2, 2),
        ])
        .unwrap();
        assert_eq!(tree.root().child_count(), 2);
    }
}
