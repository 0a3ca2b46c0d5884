//! Archive listing implementation.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use flate2::read::GzDecoder;
use tracing::debug;
use tracing::trace;

use crate::InspectError;
use crate::ReaderConfig;
use crate::Result;
use crate::catalog::RawEntry;
use crate::formats::detect::ArchiveType;
use crate::formats::detect::detect_format;
use crate::inspection::quota::QuotaTracker;
use crate::io::ChecksumReader;
use crate::types::CompressionMethod;
use crate::types::EntryMetadata;

/// Lists archive entries without extracting.
///
/// Returns one raw record per archive entry, in archive order. Zip metadata
/// comes straight from the central directory. Tar entries are streamed
/// through CRC-32 so that both families carry a content fingerprint.
///
/// # Arguments
///
/// * `archive_path` - Path to archive file
/// * `config` - Reader limits
///
/// # Errors
///
/// Returns error if:
/// - Archive file cannot be opened
/// - Archive format is unsupported or corrupted
/// - Quota limits exceeded (entry count, total size)
///
/// # Examples
///
/// ```no_run
/// use archscope_core::ReaderConfig;
/// use archscope_core::list_entries;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let entries = list_entries("archive.tar.gz", &ReaderConfig::default())?;
/// for entry in entries {
///     println!("{}: {} bytes", entry.name, entry.metadata.uncompressed_size);
/// }
/// # Ok(())
/// # }
/// ```
pub fn list_entries<P: AsRef<Path>>(archive_path: P, config: &ReaderConfig) -> Result<Vec<RawEntry>> {
    let archive_path = archive_path.as_ref();
    let format = detect_format(archive_path)?;
    debug!(path = %archive_path.display(), ?format, "listing archive");

    let file = File::open(archive_path)?;
    let entries = match format {
        ArchiveType::Zip => list_zip(file, config)?,
        ArchiveType::Tar => list_tar(BufReader::new(file), format, config)?,
        ArchiveType::TarGz => list_tar(GzDecoder::new(BufReader::new(file)), format, config)?,
        ArchiveType::TarBz2 => {
            use bzip2::read::BzDecoder;
            list_tar(BzDecoder::new(BufReader::new(file)), format, config)?
        }
        ArchiveType::TarXz => {
            use xz2::read::XzDecoder;
            list_tar(XzDecoder::new(BufReader::new(file)), format, config)?
        }
        ArchiveType::TarZst => {
            use zstd::stream::read::Decoder as ZstdDecoder;
            list_tar(ZstdDecoder::new(BufReader::new(file))?, format, config)?
        }
    };

    debug!(entries = entries.len(), "archive listed");
    Ok(entries)
}

fn list_tar<R: Read>(reader: R, format: ArchiveType, config: &ReaderConfig) -> Result<Vec<RawEntry>> {
    let compression = format
        .stream_compression()
        .unwrap_or(CompressionMethod::Stored);
    let mut archive = tar::Archive::new(reader);
    let mut quota = QuotaTracker::new();
    let mut entries = Vec::new();

    let iter = archive
        .entries()
        .map_err(|e| InspectError::InvalidArchive(format!("failed to read TAR entries: {e}")))?;

    for entry_result in iter {
        let mut entry = entry_result
            .map_err(|e| InspectError::InvalidArchive(format!("failed to read TAR entry: {e}")))?;

        let entry_type = entry.header().entry_type();
        if matches!(
            entry_type,
            tar::EntryType::XGlobalHeader
                | tar::EntryType::XHeader
                | tar::EntryType::GNULongName
                | tar::EntryType::GNULongLink
        ) {
            continue;
        }

        let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        let modified = entry
            .header()
            .mtime()
            .ok()
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|t| t.naive_utc());

        let (is_directory, size, checksum) = match entry_type {
            tar::EntryType::Directory => (true, 0, 0),
            tar::EntryType::Symlink | tar::EntryType::Link => {
                let target = entry.link_name_bytes().unwrap_or_default();
                (false, target.len() as u64, crc32fast::hash(&target))
            }
            tar::EntryType::Char | tar::EntryType::Block | tar::EntryType::Fifo => {
                return Err(InspectError::InvalidArchive(format!(
                    "special file not supported: {name}"
                )));
            }
            _ => {
                quota.record_entry(entry.size(), config)?;
                let (size, checksum) = ChecksumReader::new(&mut entry).drain().map_err(|e| {
                    InspectError::InvalidArchive(format!("failed to read TAR entry '{name}': {e}"))
                })?;
                trace!(%name, size, checksum, "tar entry");
                entries.push(RawEntry {
                    name,
                    is_directory: false,
                    metadata: EntryMetadata {
                        uncompressed_size: size,
                        compressed_size: size,
                        checksum,
                        compression: compression.clone(),
                        modified,
                    },
                });
                continue;
            }
        };

        quota.record_entry(size, config)?;
        trace!(%name, is_directory, size, "tar entry");
        entries.push(RawEntry {
            name,
            is_directory,
            metadata: EntryMetadata {
                uncompressed_size: size,
                compressed_size: size,
                checksum,
                compression: compression.clone(),
                modified,
            },
        });
    }

    Ok(entries)
}

fn list_zip(file: File, config: &ReaderConfig) -> Result<Vec<RawEntry>> {
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| InspectError::InvalidArchive(format!("failed to open ZIP archive: {e}")))?;
    let mut quota = QuotaTracker::new();
    let mut entries = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| InspectError::InvalidArchive(format!("failed to read ZIP entry: {e}")))?;

        quota.record_entry(entry.size(), config)?;

        let compression = zip_compression(entry.compression());

        let raw = RawEntry {
            name: entry.name().to_string(),
            is_directory: entry.is_dir(),
            metadata: EntryMetadata {
                uncompressed_size: entry.size(),
                compressed_size: entry.compressed_size(),
                checksum: entry.crc32(),
                compression,
                modified: entry.last_modified().and_then(zip_timestamp),
            },
        };
        trace!(name = %raw.name, size = raw.metadata.uncompressed_size, "zip entry");
        entries.push(raw);
    }

    Ok(entries)
}

/// Maps a zip method to its tag by method code.
///
/// Compared against the `zip` constants so the mapping holds whichever codec
/// features the `zip` crate was built with; without them every non-stored
/// method decodes as `Unsupported(code)`.
fn zip_compression(method: zip::CompressionMethod) -> CompressionMethod {
    use zip::CompressionMethod as Zip;

    match method {
        m if m == Zip::STORE => CompressionMethod::Stored,
        m if m == Zip::DEFLATE => CompressionMethod::Deflated,
        m if m == Zip::BZIP2 => CompressionMethod::Bzip2,
        m if m == Zip::LZMA => CompressionMethod::Lzma,
        m if m == Zip::ZSTD => CompressionMethod::Zstd,
        m if m == Zip::XZ => CompressionMethod::Xz,
        #[allow(deprecated)]
        Zip::Unsupported(code) => CompressionMethod::Other(format!("method {code}")),
        other => CompressionMethod::from_name(&format!("{other:?}")),
    }
}

fn zip_timestamp(dt: zip::DateTime) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(
        i32::from(dt.year()),
        u32::from(dt.month()),
        u32::from(dt.day()),
    )?
    .and_hms_opt(
        u32::from(dt.hour()),
        u32::from(dt.minute()),
        u32::from(dt.second()),
    )
}
