//! Subcommand implementations.

pub mod completion;
pub mod content;
pub mod diff;
pub mod tree;
pub mod walk;
