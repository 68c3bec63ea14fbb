//! Infrastructure adapters for Splice.
//!
//! This crate implements the ports defined in `splice-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod kit;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use kit::{BuiltinKit, DirectoryKit, kit_source};
