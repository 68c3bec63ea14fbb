use std::path::{Path, PathBuf};

use crate::domain::entities::common::RelativePath;

/// Marker file of an initialised Shopify app.
pub const DEFAULT_MARKER: &str = "shopify.app.toml";

/// A directory treated as the project root once its marker file is found.
///
/// Construction does not touch the filesystem; services verify the marker
/// through the `Filesystem` port before mutating anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    dir: PathBuf,
    marker: String,
}

impl ProjectRoot {
    pub fn new(dir: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            marker: marker.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn marker_path(&self) -> PathBuf {
        self.dir.join(&self.marker)
    }

    /// Absolute (or cwd-relative) location of a project file.
    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        self.dir.join(path)
    }
}
