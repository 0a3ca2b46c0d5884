//! Directory-wise traversal of a tree.

use super::TreeNode;
use crate::types::EntryPath;

/// Contents of one directory as produced by [`Walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    /// Path of the directory; the root path for the archive root.
    pub path: EntryPath,

    /// Names of the immediate subdirectories, sorted.
    pub directories: Vec<String>,

    /// Names of the immediate files, sorted.
    pub files: Vec<String>,
}

/// Iterator over every directory of a tree, parents before children.
///
/// Created by [`super::Tree::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(EntryPath, &'a TreeNode)>,
}

impl<'a> Walk<'a> {
    pub(super) fn new(root: &'a TreeNode) -> Self {
        Self {
            stack: vec![(EntryPath::root(), root)],
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = DirListing;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;

        let mut directories = Vec::new();
        let mut files = Vec::new();
        for child in node.children() {
            if child.is_directory() {
                directories.push(child.name().to_string());
            } else {
                files.push(child.name().to_string());
            }
        }

        // Reverse push so the smallest name is popped first.
        for child in node.children().rev().filter(|c| c.is_directory()) {
            self.stack.push((path.join(child.name()), child));
        }

        Some(DirListing {
            path,
            directories,
            files,
        })
    }
}
