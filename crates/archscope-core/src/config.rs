//! Reader configuration for archive listing.

/// Limits applied while reading an archive listing.
///
/// Listing never writes to disk, but a hostile archive can still declare an
/// enormous number of entries or sizes. These quotas bound the work done
/// before any tree is built.
///
/// # Examples
///
/// ```
/// use archscope_core::ReaderConfig;
///
/// // Use defaults
/// let config = ReaderConfig::default();
///
/// // Customize for specific needs
/// let custom = ReaderConfig {
///     max_entry_count: 100_000,
///     ..Default::default()
/// };
/// assert!(custom.max_entry_count > config.max_entry_count);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Maximum number of entries read from one archive.
    pub max_entry_count: usize,

    /// Maximum sum of declared uncompressed sizes in bytes.
    pub max_total_size: u64,
}

impl Default for ReaderConfig {
    /// Creates a `ReaderConfig` with default limits.
    ///
    /// Default values:
    /// - `max_entry_count`: 10,000
    /// - `max_total_size`: 4 GiB
    fn default() -> Self {
        Self {
            max_entry_count: 10_000,
            max_total_size: 4 * 1024 * 1024 * 1024, // 4 GiB
        }
    }
}

impl ReaderConfig {
    /// Creates a configuration without practical limits, for trusted
    /// archives.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            max_entry_count: usize::MAX,
            max_total_size: u64::MAX,
        }
    }
}
