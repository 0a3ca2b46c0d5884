//! Value types shared by the catalog, tree, resolver and diff engine.
//!
//! All types here are plain immutable values. Paths are kept as segment
//! sequences rather than `PathBuf` so that archive paths never pick up
//! platform separator semantics.

pub mod entry_path;
pub mod metadata;
pub mod node_kind;

pub use entry_path::EntryPath;
pub use metadata::CompressionMethod;
pub use metadata::EntryMetadata;
pub use node_kind::NodeKind;
