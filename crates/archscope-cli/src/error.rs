//! Error conversion utilities for CLI.
//!
//! Converts archscope-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use archscope_core::InspectError;
use archscope_core::QuotaResource;
use std::path::Path;

/// Converts `InspectError` to user-friendly anyhow error with context
pub fn convert_inspect_error(err: InspectError, archive: &Path) -> anyhow::Error {
    match err {
        InspectError::Io(io_err) => {
            anyhow!(
                "I/O error while reading '{}': {}",
                archive.display(),
                io_err
            )
        }
        InspectError::UnsupportedFormat => {
            anyhow!(
                "Archive format not supported: {}\n\
                 HINT: Supported formats: zip, jar, whl, tar, tar.gz, tar.bz2, tar.xz, tar.zst",
                archive.display()
            )
        }
        InspectError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or malformed.",
                archive.display(),
                reason
            )
        }
        InspectError::QuotaExceeded { resource } => {
            let flag = match resource {
                QuotaResource::EntryCount { .. } => "--max-entries",
                QuotaResource::TotalSize { .. } => "--max-total-size",
            };
            anyhow!(
                "Reading limit exceeded for '{}': {}\n\
                 HINT: Use {flag} to raise the limit if the archive is trusted.",
                archive.display(),
                resource
            )
        }
        InspectError::DuplicatePath { path } => {
            anyhow!(
                "Archive '{}' lists '{}' more than once\n\
                 HINT: Entry names are compared after normalizing separators and '.' segments.",
                archive.display(),
                path
            )
        }
        InspectError::PathKindConflict {
            path,
            existing,
            requested,
        } => {
            anyhow!(
                "Archive '{}' uses '{}' as both a {} and a {}\n\
                 HINT: The archive listing is inconsistent and has no valid tree.",
                archive.display(),
                path,
                existing,
                requested
            )
        }
        InspectError::NotFound { matched, missing } => {
            anyhow!(
                "No '{}' under '{}' in '{}'\n\
                 HINT: Run 'archscope content {} {}' to see what exists there.",
                missing,
                matched,
                archive.display(),
                archive.display(),
                if matched.is_root() {
                    String::new()
                } else {
                    matched.to_string()
                }
            )
        }
        other @ InspectError::InvalidPath { .. } => anyhow::Error::from(other)
            .context(format!("Error reading archive '{}'", archive.display())),
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, InspectError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_inspect_error(e, archive))
}
