//! Entry catalog: canonical records built from an archive's flat listing.
//!
//! The catalog is the boundary between archive readers, which know about
//! formats and raw names, and the tree builder, which only sees normalized
//! segment paths.

use std::collections::HashSet;

use tracing::debug;
use tracing::trace;

use crate::InspectError;
use crate::Result;
use crate::types::CompressionMethod;
use crate::types::EntryMetadata;
use crate::types::EntryPath;

/// One record as delivered by an archive reader, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Entry name exactly as stored in the archive.
    pub name: String,

    /// Directory flag reported by the archive format.
    ///
    /// A trailing separator in `name` marks a directory as well.
    pub is_directory: bool,

    /// Sizes, checksum, compression and timestamp of the record.
    pub metadata: EntryMetadata,
}

impl RawEntry {
    /// Creates a stored file record with the given size and checksum.
    ///
    /// # Examples
    ///
    /// ```
    /// use archscope_core::RawEntry;
    ///
    /// let entry = RawEntry::file("docs/readme.txt", 100, 0xAA);
    /// assert!(!entry.is_directory);
    /// assert_eq!(entry.metadata.uncompressed_size, 100);
    /// ```
    #[must_use]
    pub fn file(name: impl Into<String>, size: u64, checksum: u32) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            metadata: EntryMetadata {
                uncompressed_size: size,
                compressed_size: size,
                checksum,
                compression: CompressionMethod::Stored,
                modified: None,
            },
        }
    }

    /// Creates an explicit directory record.
    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            metadata: EntryMetadata {
                uncompressed_size: 0,
                compressed_size: 0,
                checksum: 0,
                compression: CompressionMethod::Stored,
                modified: None,
            },
        }
    }
}

/// A normalized archive record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Normalized path.
    pub path: EntryPath,

    /// `true` if the archive stored an explicit directory record.
    pub is_explicit_directory: bool,

    /// Record metadata.
    pub metadata: EntryMetadata,
}

/// Normalized entry list of one archive, in archive order.
///
/// # Examples
///
/// ```
/// use archscope_core::Catalog;
/// use archscope_core::RawEntry;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::build(vec![
///     RawEntry::directory("docs/"),
///     RawEntry::file("docs\\readme.txt", 100, 0xAA),
/// ])?;
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.entries()[1].path.to_string(), "docs/readme.txt");
///
/// let duplicate = Catalog::build(vec![
///     RawEntry::file("a.txt", 1, 1),
///     RawEntry::file("./a.txt", 1, 1),
/// ]);
/// assert!(duplicate.is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ArchiveEntry>,
}

impl Catalog {
    /// Normalizes raw records into a catalog.
    ///
    /// Records normalizing to the same path with the same kind are rejected.
    /// Records normalizing to the same path with different kinds are kept;
    /// the tree builder reports them as a kind conflict.
    ///
    /// Directory records naming the archive root (`./` as written by
    /// `tar -C dir -cf x.tar .`) are dropped; the tree always has a root.
    ///
    /// # Errors
    ///
    /// - `InspectError::InvalidPath` for names with `..` and for file
    ///   records with no segments
    /// - `InspectError::DuplicatePath` for repeated records
    pub fn build<I>(raw_entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let raw_entries = raw_entries.into_iter();
        let mut entries = Vec::with_capacity(raw_entries.size_hint().0);
        let mut seen: HashSet<(EntryPath, bool)> = HashSet::with_capacity(entries.capacity());

        for raw in raw_entries {
            let (path, trailing) = EntryPath::normalize(&raw.name)?;
            let is_explicit_directory = raw.is_directory || trailing;

            if path.is_root() {
                if is_explicit_directory {
                    trace!(raw = %raw.name, "skipped root directory record");
                    continue;
                }
                return Err(InspectError::InvalidPath {
                    path: raw.name,
                    reason: "empty path",
                });
            }

            if !seen.insert((path.clone(), is_explicit_directory)) {
                return Err(InspectError::DuplicatePath { path });
            }

            trace!(raw = %raw.name, %path, is_explicit_directory, "catalogued entry");
            entries.push(ArchiveEntry {
                path,
                is_explicit_directory,
                metadata: raw.metadata,
            });
        }

        debug!(entries = entries.len(), "catalog built");
        Ok(Self { entries })
    }

    /// Returns the entries in archive order.
    #[must_use]
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Catalog {
    type Item = ArchiveEntry;
    type IntoIter = std::vec::IntoIter<ArchiveEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
