//! Archive format detection.

pub mod detect;

pub use detect::ArchiveType;
pub use detect::detect_format;
