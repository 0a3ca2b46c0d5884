//! Archive listing without extraction.
//!
//! This is the reader side of the crate: it opens an archive file, decodes
//! its entry headers and hands back raw records for the
//! [`Catalog`](crate::Catalog). Payloads are never written anywhere; tar
//! entries are only streamed through a checksum.
//!
//! # Examples
//!
//! ```no_run
//! use archscope_core::ReaderConfig;
//! use archscope_core::list_entries;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReaderConfig::default();
//! let entries = list_entries("archive.zip", &config)?;
//! println!("Archive contains {} entries", entries.len());
//! # Ok(())
//! # }
//! ```

pub mod list;
pub mod quota;

pub use list::list_entries;
pub use quota::QuotaTracker;
