//! Tree node type and depth-first flattening.

use std::collections::BTreeMap;

use crate::types::EntryMetadata;
use crate::types::EntryPath;
use crate::types::NodeKind;

/// One node of an archive tree.
///
/// Children are kept in a `BTreeMap`, so every iteration over them is in
/// lexicographic name order regardless of archive order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub(super) name: String,
    pub(super) kind: NodeKind,
    pub(super) metadata: Option<EntryMetadata>,
    pub(super) children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    pub(super) fn directory(name: &str, metadata: Option<EntryMetadata>) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Directory,
            metadata,
            children: BTreeMap::new(),
        }
    }

    pub(super) fn file(name: &str, metadata: EntryMetadata) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::File,
            metadata: Some(metadata),
            children: BTreeMap::new(),
        }
    }

    /// Returns the node name; empty for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns `true` for files.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Returns `true` for directories.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// Returns the record metadata.
    ///
    /// Always present for files. Present for directories only when the
    /// archive stored an explicit directory record.
    #[must_use]
    pub const fn metadata(&self) -> Option<&EntryMetadata> {
        self.metadata.as_ref()
    }

    /// Returns `true` for a directory created only because other entries
    /// needed it as a prefix.
    #[must_use]
    pub const fn is_synthesized(&self) -> bool {
        self.kind.is_directory() && self.metadata.is_none()
    }

    /// Iterates over children in name order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Self> + ExactSizeIterator {
        self.children.values()
    }

    /// Looks up a direct child by exact name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.get(name)
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Flattens the subtree below this node in depth-first pre-order.
    ///
    /// Paths are relative to this node. The node itself is not included.
    ///
    /// # Examples
    ///
    /// ```
    /// use archscope_core::RawEntry;
    /// use archscope_core::WalkOptions;
    /// use archscope_core::build_tree;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let tree = build_tree(vec![
    ///     RawEntry::file("src/lib.rs", 10, 1),
    ///     RawEntry::file("src/tree/mod.rs", 20, 2),
    ///     RawEntry::file("Cargo.toml", 5, 3),
    /// ])?;
    ///
    /// let all: Vec<String> = tree
    ///     .root()
    ///     .descendants(&WalkOptions::default())
    ///     .into_iter()
    ///     .map(|(path, _)| path.to_string())
    ///     .collect();
    /// assert_eq!(all, ["Cargo.toml", "src", "src/lib.rs", "src/tree", "src/tree/mod.rs"]);
    ///
    /// let top_dirs = tree.root().descendants(&WalkOptions {
    ///     max_depth: Some(1),
    ///     dirs_only: true,
    /// });
    /// assert_eq!(top_dirs.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn descendants(&self, options: &WalkOptions) -> Vec<(EntryPath, &Self)> {
        let mut out = Vec::new();
        self.collect_descendants(&EntryPath::root(), options, &mut out);
        out
    }

    fn collect_descendants<'a>(
        &'a self,
        base: &EntryPath,
        options: &WalkOptions,
        out: &mut Vec<(EntryPath, &'a Self)>,
    ) {
        if options.max_depth.is_some_and(|max| base.depth() >= max) {
            return;
        }

        for child in self.children.values() {
            if options.dirs_only && child.is_file() {
                continue;
            }
            let path = base.join(&child.name);
            out.push((path.clone(), child));
            child.collect_descendants(&path, options, out);
        }
    }
}

/// Options for [`TreeNode::descendants`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Maximum depth below the starting node; `None` means unlimited.
    pub max_depth: Option<usize>,

    /// Skip files and list directories only.
    pub dirs_only: bool,
}
