//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `splice-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Kit;
use crate::error::SpliceResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `splice_adapters::filesystem::LocalFilesystem` (production)
/// - `splice_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are already resolved against the project root by the services
/// - Content is UTF-8 text with `\n` line endings
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SpliceResult<()>;

    /// Write content to a file, truncating any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SpliceResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> SpliceResult<String>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Port for kit retrieval.
///
/// Implemented by:
/// - `splice_adapters::kit::BuiltinKit` (the countdown-timer kit)
/// - `splice_adapters::kit::DirectoryKit` (a kit on disk)
pub trait KitSource: Send + Sync {
    /// Load and validate the kit.
    fn load(&self) -> SpliceResult<Kit>;
}
