//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "splice",
    bin_name = "splice",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a storefront kit and wire it into your app",
    long_about = "Splice writes a kit's files into a Shopify app and \
                  idempotently patches the app's server entry file to use them.",
    after_help = "EXAMPLES:\n\
        \x20 splice scaffold\n\
        \x20 splice patch --dry-run\n\
        \x20 splice patch --root ../my-app --target web/server.js\n\
        \x20 splice completions bash > /usr/share/bash-completion/completions/splice",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the kit's files into the project.
    #[command(
        visible_alias = "s",
        about = "Generate the kit's files",
        after_help = "EXAMPLES:\n\
            \x20 splice scaffold\n\
            \x20 splice scaffold --root ../my-app\n\
            \x20 splice scaffold --kit ./kits/loyalty --dry-run"
    )]
    Scaffold(ScaffoldArgs),

    /// Patch the server entry file.
    #[command(
        visible_alias = "p",
        about = "Wire the kit into the server entry file",
        after_help = "EXAMPLES:\n\
            \x20 splice patch\n\
            \x20 splice patch --target web/server.js\n\
            \x20 splice patch --dry-run --output-format json"
    )]
    Patch(PatchArgs),

    /// Show what a kit contains.
    #[command(
        visible_alias = "ls",
        about = "List the kit's files and patch target",
        after_help = "EXAMPLES:\n\
            \x20 splice list\n\
            \x20 splice list --kit ./kits/loyalty --format json"
    )]
    List(ListArgs),

    /// Initialise a Splice configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 splice init\n\
            \x20 splice init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 splice completions bash > ~/.local/share/bash-completion/completions/splice\n\
            \x20 splice completions zsh  > ~/.zfunc/_splice\n\
            \x20 splice completions fish > ~/.config/fish/completions/splice.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Splice configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 splice config get patch.target\n\
            \x20 splice config list\n\
            \x20 splice config path"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Where to operate and with which kit.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project root (must contain the marker file).
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Kit directory; the built-in countdown-timer kit when omitted.
    #[arg(
        short = 'k',
        long = "kit",
        value_name = "DIR",
        help = "Kit directory (default: built-in kit)"
    )]
    pub kit: Option<PathBuf>,

    /// Report what would change without writing anything.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for `splice scaffold`.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

// ── patch ─────────────────────────────────────────────────────────────────────

/// Arguments for `splice patch`.
#[derive(Debug, Args)]
pub struct PatchArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Entry file, relative to the project root.
    #[arg(
        short = 't',
        long = "target",
        value_name = "PATH",
        help = "File to patch, relative to the root (default: web/index.js)"
    )]
    pub target: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `splice list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Kit directory; the built-in kit when omitted.
    #[arg(short = 'k', long = "kit", value_name = "DIR", help = "Kit directory")]
    pub kit: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `splice init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `splice completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `splice config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `patch.target`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_scaffold_with_root() {
        let cli = Cli::parse_from(["splice", "scaffold", "--root", "/srv/app", "--dry-run"]);
        let Commands::Scaffold(args) = cli.command else {
            panic!("expected Scaffold command");
        };
        assert_eq!(args.project.root, Some(PathBuf::from("/srv/app")));
        assert!(args.project.dry_run);
        assert!(args.project.kit.is_none());
    }

    #[test]
    fn parse_patch_with_target() {
        let cli = Cli::parse_from(["splice", "patch", "-t", "web/server.js"]);
        let Commands::Patch(args) = cli.command else {
            panic!("expected Patch command");
        };
        assert_eq!(args.target, Some(PathBuf::from("web/server.js")));
        assert!(!args.project.dry_run);
    }

    #[test]
    fn aliases_resolve() {
        assert!(matches!(
            Cli::parse_from(["splice", "p"]).command,
            Commands::Patch(_)
        ));
        assert!(matches!(
            Cli::parse_from(["splice", "ls"]).command,
            Commands::List(_)
        ));
    }

    #[test]
    fn list_format_defaults_to_table() {
        let Commands::List(args) = Cli::parse_from(["splice", "list"]).command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["splice", "patch", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["splice", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_color_flag_needs_no_value() {
        let cli = Cli::try_parse_from(["splice", "list", "--no-color"]).unwrap();
        assert!(cli.global.no_color);
    }
}
