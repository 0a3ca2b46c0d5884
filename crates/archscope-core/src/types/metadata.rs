//! Per-entry metadata carried from the archive listing into trees and diffs.

use std::fmt;

use chrono::NaiveDateTime;

/// Compression method recorded for an archive entry.
///
/// For tar-family archives this is the codec of the whole stream, since tar
/// entries are not compressed individually.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompressionMethod {
    /// No compression.
    Stored,
    /// Deflate (zip, gzip).
    Deflated,
    /// Bzip2.
    Bzip2,
    /// LZMA.
    Lzma,
    /// XZ.
    Xz,
    /// Zstandard.
    Zstd,
    /// Any other method, by name.
    Other(String),
}

impl CompressionMethod {
    /// Maps a method name (as printed by archive libraries) to a tag.
    ///
    /// Matching is case-insensitive; unknown names become `Other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use archscope_core::types::CompressionMethod;
    ///
    /// assert_eq!(CompressionMethod::from_name("Zstd"), CompressionMethod::Zstd);
    /// assert_eq!(
    ///     CompressionMethod::from_name("Deflate64"),
    ///     CompressionMethod::Other("Deflate64".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "stored" | "store" | "none" => Self::Stored,
            "deflated" | "deflate" | "gzip" => Self::Deflated,
            "bzip2" => Self::Bzip2,
            "lzma" => Self::Lzma,
            "xz" => Self::Xz,
            "zstd" | "zstandard" => Self::Zstd,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Returns the lowercase display name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Stored => "stored",
            Self::Deflated => "deflated",
            Self::Bzip2 => "bzip2",
            Self::Lzma => "lzma",
            Self::Xz => "xz",
            Self::Zstd => "zstd",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Metadata of one archive record.
///
/// Sizes and checksum are meaningless for directory records but are kept so
/// that presenters can show whatever the archive stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Uncompressed size in bytes.
    pub uncompressed_size: u64,

    /// Compressed size in bytes (equal to the uncompressed size for tar).
    pub compressed_size: u64,

    /// CRC-32 of the entry content.
    pub checksum: u32,

    /// Compression method tag.
    pub compression: CompressionMethod,

    /// Last modification time, if recorded.
    pub modified: Option<NaiveDateTime>,
}

impl EntryMetadata {
    /// Returns `true` if both records describe the same content.
    ///
    /// Only `(uncompressed_size, checksum)` take part. Compression method,
    /// compressed size and timestamps may differ between two archives holding
    /// identical content.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.uncompressed_size == other.uncompressed_size && self.checksum == other.checksum
    }
}
