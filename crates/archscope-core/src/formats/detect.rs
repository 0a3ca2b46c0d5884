//! Archive format detection.

use std::path::Path;

use crate::InspectError;
use crate::Result;
use crate::types::CompressionMethod;

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveType {
    /// Tar archive (uncompressed).
    Tar,
    /// Gzip-compressed tar archive.
    TarGz,
    /// Bzip2-compressed tar archive.
    TarBz2,
    /// XZ-compressed tar archive.
    TarXz,
    /// Zstd-compressed tar archive.
    TarZst,
    /// ZIP archive.
    Zip,
}

impl ArchiveType {
    /// Returns the compression tag recorded for every entry of a tar-family
    /// archive, or `None` for formats that compress entries individually.
    #[must_use]
    pub fn stream_compression(self) -> Option<CompressionMethod> {
        match self {
            Self::Tar => Some(CompressionMethod::Stored),
            Self::TarGz => Some(CompressionMethod::Deflated),
            Self::TarBz2 => Some(CompressionMethod::Bzip2),
            Self::TarXz => Some(CompressionMethod::Xz),
            Self::TarZst => Some(CompressionMethod::Zstd),
            Self::Zip => None,
        }
    }
}

/// Detects the archive type from a file path.
///
/// # Errors
///
/// Returns an error if the format cannot be determined.
pub fn detect_format(path: &Path) -> Result<ArchiveType> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or(InspectError::UnsupportedFormat)?;

    let ext_lower = extension.to_ascii_lowercase();
    match ext_lower.as_str() {
        "tar" => Ok(ArchiveType::Tar),
        "gz" | "tgz" => Ok(ArchiveType::TarGz),
        "bz2" | "tbz" | "tbz2" => Ok(ArchiveType::TarBz2),
        "xz" | "txz" => Ok(ArchiveType::TarXz),
        "zst" | "tzst" => Ok(ArchiveType::TarZst),
        "zip" | "jar" | "whl" => Ok(ArchiveType::Zip),
        _ => Err(InspectError::UnsupportedFormat),
    }
}
