//! Listing quota tracking.

use crate::InspectError;
use crate::ReaderConfig;
use crate::Result;
use crate::error::QuotaResource;

/// Tracks entry count and declared size while an archive is listed.
#[derive(Debug, Default)]
pub struct QuotaTracker {
    entries: usize,
    total_size: u64,
}

impl QuotaTracker {
    /// Creates a new quota tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one entry with its declared uncompressed size.
    ///
    /// # Errors
    ///
    /// Returns `InspectError::QuotaExceeded` if the entry count or the total
    /// size would go over the configured limit.
    pub fn record_entry(&mut self, size: u64, config: &ReaderConfig) -> Result<()> {
        if self.entries >= config.max_entry_count {
            return Err(InspectError::QuotaExceeded {
                resource: QuotaResource::EntryCount {
                    current: self.entries + 1,
                    max: config.max_entry_count,
                },
            });
        }

        let total = self.total_size.saturating_add(size);
        if total > config.max_total_size {
            return Err(InspectError::QuotaExceeded {
                resource: QuotaResource::TotalSize {
                    current: total,
                    max: config.max_total_size,
                },
            });
        }

        self.entries += 1;
        self.total_size = total;
        Ok(())
    }

    /// Returns the number of entries recorded.
    #[must_use]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Returns the total declared size recorded.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.total_size
    }
}
