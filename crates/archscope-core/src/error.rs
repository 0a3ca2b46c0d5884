//! Error types for archive inspection operations.

use thiserror::Error;

use crate::types::EntryPath;
use crate::types::NodeKind;

/// Result type alias using `InspectError`.
pub type Result<T> = std::result::Result<T, InspectError>;

/// Represents a specific reader quota that was exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotaResource {
    /// Entry count quota exceeded.
    EntryCount {
        /// Current entry count.
        current: usize,
        /// Maximum allowed entry count.
        max: usize,
    },
    /// Total uncompressed size quota exceeded.
    TotalSize {
        /// Current total size in bytes.
        current: u64,
        /// Maximum allowed total size in bytes.
        max: u64,
    },
}

impl std::fmt::Display for QuotaResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntryCount { current, max } => {
                write!(f, "quota exceeded: entry count ({current} > {max})")
            }
            Self::TotalSize { current, max } => {
                write!(f, "quota exceeded: total size ({current} > {max})")
            }
        }
    }
}

/// Errors that can occur while reading, modelling or navigating archives.
#[derive(Error, Debug)]
pub enum InspectError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive format is unsupported or unrecognized.
    #[error("unsupported archive format")]
    UnsupportedFormat,

    /// Archive is corrupted or invalid.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Reader quota exceeded.
    #[error("{resource}")]
    QuotaExceeded {
        /// Description of the exceeded resource.
        resource: QuotaResource,
    },

    /// An entry path cannot be normalized into a usable segment sequence.
    #[error("invalid entry path '{path}': {reason}")]
    InvalidPath {
        /// The raw path as stored in the archive.
        path: String,
        /// Why the path was rejected.
        reason: &'static str,
    },

    /// Two archive records normalize to the same path.
    #[error("duplicate entry: {path}")]
    DuplicatePath {
        /// The normalized path that occurs more than once.
        path: EntryPath,
    },

    /// A path is declared both as a file and as a directory.
    #[error("path kind conflict at {path}: {existing} already present, {requested} required")]
    PathKindConflict {
        /// The path where the conflict was detected.
        path: EntryPath,
        /// The kind already present in the tree.
        existing: NodeKind,
        /// The kind the current entry needs at that path.
        requested: NodeKind,
    },

    /// A requested sub-path does not exist in a tree.
    #[error("path not found: '{missing}' under {matched}")]
    NotFound {
        /// Longest prefix of the request that exists in the tree.
        matched: EntryPath,
        /// First segment that could not be matched.
        missing: String,
    },
}

impl InspectError {
    /// Returns `true` if this error means the archive listing itself is
    /// structurally malformed.
    ///
    /// Structural errors abort tree construction: no partial tree is ever
    /// returned for a listing with duplicates or kind conflicts.
    ///
    /// # Examples
    ///
    /// ```
    /// use archscope_core::InspectError;
    /// use archscope_core::types::EntryPath;
    ///
    /// let err = InspectError::DuplicatePath {
    ///     path: EntryPath::from_segments(["a", "b"]),
    /// };
    /// assert!(err.is_structural());
    ///
    /// let err = InspectError::UnsupportedFormat;
    /// assert!(!err.is_structural());
    /// ```
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::DuplicatePath { .. } | Self::PathKindConflict { .. } | Self::InvalidPath { .. }
        )
    }

    /// Returns `true` if this error is a negative lookup result rather than a
    /// failure of the archive or the tool.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use archscope_core::InspectError;
    ///
    /// let err = InspectError::InvalidArchive("bad header".to_string());
    /// assert_eq!(err.context(), Some("bad header"));
    ///
    /// let err = InspectError::UnsupportedFormat;
    /// assert_eq!(err.context(), None);
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidArchive(msg) => Some(msg),
            Self::InvalidPath { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Returns the quota resource that was exceeded, if applicable.
    #[must_use]
    pub const fn quota_resource(&self) -> Option<&QuotaResource> {
        match self {
            Self::QuotaExceeded { resource } => Some(resource),
            _ => None,
        }
    }
}
