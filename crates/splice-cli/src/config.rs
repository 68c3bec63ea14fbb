//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPLICE_<SECTION>__<KEY>`, e.g.
//!    `SPLICE_PATCH__TARGET=web/server.js`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use splice_core::domain::DEFAULT_MARKER;

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "SPLICE";

/// Entry file patched when neither the CLI nor the kit names one.
pub const DEFAULT_TARGET: &str = "web/index.js";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the project lives and how it is recognised.
    pub project: ProjectConfig,
    /// Patch settings.
    pub patch: PatchConfig,
    /// Kit selection.
    pub kit: KitConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// File whose presence marks the project root.
    pub marker: String,
    /// Project root; the working directory when unset.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// Entry file, relative to the project root.
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Kit directory; the built-in kit when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.into(),
            root: None,
        }
    }
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            patch: PatchConfig::default(),
            kit: KitConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `SPLICE_*`
    /// environment variables.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with(config_file: Option<&PathBuf>, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to seed default configuration")?;

        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let config = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.splice.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "splice", "splice")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".splice.toml"))
    }

    /// The file `init` writes and `config path` reports.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Look up a dotted key such as `patch.target`.
    ///
    /// Unset optional values resolve to `Some("")`; unknown keys to `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "project.marker" => self.project.marker.clone(),
            "project.root" => display_opt(self.project.root.as_deref()),
            "patch.target" => self.patch.target.clone(),
            "kit.path" => display_opt(self.kit.path.as_deref()),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key [`AppConfig::get`] understands.
    pub const KEYS: [&'static str; 6] = [
        "project.marker",
        "project.root",
        "patch.target",
        "kit.path",
        "output.no_color",
        "output.format",
    ];
}

fn display_opt(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}
