//! I/O utilities for archive reading.
//!
//! This module provides reusable I/O wrappers used by the format readers.

pub mod checksum;

pub use checksum::ChecksumReader;
