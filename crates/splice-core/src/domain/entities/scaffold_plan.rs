use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// A single generated file: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: RelativePath,
    pub content: String,
}

impl FileSpec {
    pub fn new(path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// The bytes that end up on disk: leading and trailing whitespace removed.
    pub fn rendered(&self) -> &str {
        self.content.trim()
    }
}

/// Ordered set of files materialised by the scaffolder.
///
/// Contains no I/O; the application layer writes it through the
/// `Filesystem` port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldPlan {
    files: Vec<FileSpec>,
}

impl ScaffoldPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, spec: FileSpec) {
        self.files.push(spec);
    }

    pub fn with_file(mut self, path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        self.add_file(FileSpec::new(path, content));
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for spec in &self.files {
            if !seen.insert(spec.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: spec.path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<FileSpec> for ScaffoldPlan {
    fn from_iter<I: IntoIterator<Item = FileSpec>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
