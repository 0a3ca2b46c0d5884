//! Tree node kind enumeration.

use std::fmt;

/// Kind of a node in an archive tree.
///
/// Symlinks and hardlinks recorded by an archive are modelled as files: the
/// structural model only distinguishes leaves from containers.
///
/// # Examples
///
/// ```
/// use archscope_core::types::NodeKind;
///
/// assert!(NodeKind::File.is_file());
/// assert!(NodeKind::Directory.is_directory());
/// assert_eq!(NodeKind::Directory.to_string(), "directory");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// Regular file (leaf).
    File,

    /// Directory (container).
    Directory,
}

impl NodeKind {
    /// Returns `true` if this is a file.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns `true` if this is a directory.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Returns the lowercase name used in messages and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
