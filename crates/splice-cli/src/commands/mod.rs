//! Command handlers.
//!
//! Each handler translates parsed arguments plus [`AppConfig`] into calls on
//! the core services and renders the resulting report. No splicing logic
//! lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod patch;
pub mod scaffold;

use std::path::{Path, PathBuf};

use tracing::debug;

use splice_adapters::kit_source;
use splice_core::domain::{Kit, ProjectRoot, RelativePath};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

/// `--root`, then `project.root`, then the working directory.
pub(crate) fn resolve_root(flag: Option<&Path>, config: &AppConfig) -> CliResult<ProjectRoot> {
    let dir = match flag.or(config.project.root.as_deref()) {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().with_cli_context(|| "reading the working directory")?,
    };
    debug!(root = %dir.display(), marker = %config.project.marker, "Project root resolved");
    Ok(ProjectRoot::new(dir, config.project.marker.clone()))
}

/// `--kit`, then `kit.path`, then the built-in kit.
pub(crate) fn load_kit(flag: Option<PathBuf>, config: &AppConfig) -> CliResult<Kit> {
    let source = kit_source(flag.or_else(|| config.kit.path.clone()));
    Ok(source.load()?)
}

/// `--target`, then the kit's own target, then `patch.target`.
pub(crate) fn resolve_target(
    flag: Option<PathBuf>,
    kit: &Kit,
    config: &AppConfig,
) -> CliResult<RelativePath> {
    if let Some(path) = flag {
        return RelativePath::try_new(&path).map_err(|e| CliError::InvalidInput {
            message: format!("--target {}: {e}", path.display()),
            source: Some(Box::new(e)),
        });
    }
    if let Some(target) = &kit.target {
        return Ok(target.clone());
    }
    RelativePath::try_new(config.patch.target.as_str()).map_err(|e| CliError::ConfigError {
        message: format!("patch.target: {e}"),
        source: Some(Box::new(e)),
    })
}
