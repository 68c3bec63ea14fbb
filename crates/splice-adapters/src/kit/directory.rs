//! Kits loaded from a directory on disk.
//!
//! # Directory layout expected
//!
//! ```text
//! my-kit/
//! ├── patch.toml          ← patch plan (optional)
//! └── files/              ← scaffold tree (required)
//!     └── web/
//!         └── database.js
//! ```
//!
//! Every regular file under `files/` is scaffolded at its path relative to
//! `files/`. Without a `patch.toml` the kit reuses the built-in MongoDB
//! wiring.
//!
//! # `patch.toml` format
//!
//! ```toml
//! target         = "web/index.js"            # optional
//! sentinel       = "connectDB"
//! import_marker  = "import express from"
//! import_keyword = "import"                  # optional
//! body_anchor    = '(app\.listen\(|export default app)'
//! import_block   = """
//! import connectDB from "./database.js";
//! """
//! body_block     = """
//! connectDB();
//! """
//!
//! [notes]                                    # optional
//! scaffold = ["Run 'splice patch'"]
//! patch    = ["Run: npm run dev"]
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use splice_core::{
    application::{ApplicationError, ports::KitSource},
    domain::{
        DomainError, DomainValidator, FileSpec, Kit, KitNotes, PatchPlan,
        RelativePath, ScaffoldPlan,
    },
    error::SpliceResult,
};

use crate::kit::builtin::BuiltinKit;

const FILES_DIR: &str = "files";
const PATCH_MANIFEST: &str = "patch.toml";

/// Deserialised `patch.toml`.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct PatchManifest {
    pub target: Option<String>,
    pub sentinel: Option<String>,
    pub import_marker: Option<String>,
    pub import_keyword: Option<String>,
    pub body_anchor: Option<String>,
    pub import_block: Option<String>,
    pub body_block: Option<String>,
    #[serde(default)]
    pub notes: NotesSection,
}

/// `[notes]` section.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct NotesSection {
    #[serde(default)]
    pub scaffold: Vec<String>,
    #[serde(default)]
    pub patch: Vec<String>,
}

impl PatchManifest {
    fn into_plan(self) -> Result<(PatchPlan, Option<RelativePath>, KitNotes), KitLoadError> {
        let mut builder = PatchPlan::builder();

        if let Some(v) = self.sentinel {
            builder = builder.sentinel(v);
        }
        if let Some(v) = self.import_marker {
            builder = builder.import_marker(v);
        }
        if let Some(v) = self.import_keyword {
            builder = builder.import_keyword(v);
        }
        if let Some(v) = self.body_anchor {
            builder = builder.body_anchor(v);
        }
        if let Some(v) = self.import_block {
            builder = builder.import_block(v);
        }
        if let Some(v) = self.body_block {
            builder = builder.body_block(v);
        }

        let target = self.target.map(RelativePath::try_new).transpose()?;
        let notes = KitNotes {
            scaffold: self.notes.scaffold,
            patch: self.notes.patch,
        };

        Ok((builder.build()?, target, notes))
    }
}

/// Why a kit directory could not be turned into a [`Kit`].
#[derive(Debug, Error)]
enum KitLoadError {
    #[error("missing files/ directory")]
    MissingFilesDir,

    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to parse patch.toml: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Plan(#[from] DomainError),
}

/// Loads a [`Kit`] from a directory tree.
#[derive(Debug, Clone)]
pub struct DirectoryKit {
    dir: PathBuf,
}

impl DirectoryKit {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Kit name: the directory's own name.
    fn name(&self) -> String {
        self.dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "kit".into())
    }

    fn load_kit(&self) -> Result<Kit, KitLoadError> {
        let scaffold = self.load_scaffold()?;
        let (patch, target, notes) = match self.load_manifest()? {
            Some(manifest) => manifest.into_plan()?,
            None => {
                debug!("No {PATCH_MANIFEST}, using built-in patch plan");
                (BuiltinKit::patch_plan()?, None, BuiltinKit::notes())
            }
        };

        let mut kit = Kit::new(self.name(), scaffold, patch).with_notes(notes);
        if let Some(target) = target {
            kit = kit.with_target(target);
        }

        DomainValidator::validate_kit(&kit)?;
        Ok(kit)
    }

    /// Walk `files/` in sorted order.
    fn load_scaffold(&self) -> Result<ScaffoldPlan, KitLoadError> {
        let files_dir = self.dir.join(FILES_DIR);
        if !files_dir.is_dir() {
            return Err(KitLoadError::MissingFilesDir);
        }

        let mut plan = ScaffoldPlan::new();

        for entry in WalkDir::new(&files_dir).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                // Directories are implied by their files; symlinks are skipped.
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&files_dir)
                .map_err(|_| DomainError::InvalidKit(format!(
                    "failed to relativise '{}'",
                    entry.path().display()
                )))?;
            let rel = normalize_path(&rel.to_string_lossy());

            let content = fs::read_to_string(entry.path()).map_err(|source| KitLoadError::Read {
                path: rel.clone(),
                source,
            })?;

            plan.add_file(FileSpec::new(RelativePath::try_new(rel)?, content));
        }

        Ok(plan)
    }

    fn load_manifest(&self) -> Result<Option<PatchManifest>, KitLoadError> {
        let path = self.dir.join(PATCH_MANIFEST);
        if !path.is_file() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path).map_err(|source| KitLoadError::Read {
            path: PATCH_MANIFEST.into(),
            source,
        })?;
        Ok(Some(toml::from_str(&raw)?))
    }
}

impl KitSource for DirectoryKit {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self) -> SpliceResult<Kit> {
        if !self.dir.is_dir() {
            return Err(ApplicationError::KitNotFound {
                path: self.dir.clone(),
            }
            .into());
        }

        match self.load_kit() {
            Ok(kit) => {
                debug!(kit = %kit.name, files = kit.scaffold.len(), "Loaded kit");
                Ok(kit)
            }
            Err(e) => {
                warn!(error = %e, "Kit rejected");
                Err(ApplicationError::InvalidKit {
                    path: self.dir.clone(),
                    reason: e.to_string(),
                }
                .into())
            }
        }
    }
}

/// Forward slashes so kits authored on Windows scaffold the same tree.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
