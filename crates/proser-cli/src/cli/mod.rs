//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "proser",
    bin_name = "proser",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold AI-agent instruction files into an existing project",
    long_about = "Proser writes Copilot instructions, agent definitions, prompt and \
                  spec templates, and per-directory AGENT.md guidance into an \
                  existing project directory.",
    after_help = "EXAMPLES:\n\
        \x20 proser setup\n\
        \x20 proser setup ./my-service --type backend --yes\n\
        \x20 proser scan . --depth 2\n\
        \x20 proser completions bash > /usr/share/bash-completion/completions/proser",
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
    /// Generate instruction files into a project directory.
    #[command(
        visible_alias = "s",
        about = "Scaffold instruction files into a project",
        after_help = "EXAMPLES:\n\
            \x20 proser setup                          # current directory, fullstack\n\
            \x20 proser setup ../api --type backend\n\
            \x20 proser setup --answers answers.toml --yes\n\
            \x20 proser setup --dry-run"
    )]
    Setup(SetupArgs),

    /// Show which directories would receive an AGENT.md.
    #[command(
        about = "List directories selected for per-directory guidance",
        after_help = "EXAMPLES:\n\
            \x20 proser scan\n\
            \x20 proser scan ./repo --depth 2 --format json"
    )]
    Scan(ScanArgs),

    /// List available project types.
    #[command(
        visible_alias = "ls",
        about = "List available project types",
        after_help = "EXAMPLES:\n\
            \x20 proser types\n\
            \x20 proser types --format json"
    )]
    Types(TypesArgs),

    /// Initialise a Proser configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 proser init\n\
            \x20 proser init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 proser completions bash > ~/.local/share/bash-completion/completions/proser\n\
            \x20 proser completions zsh  > ~/.zfunc/_proser\n\
            \x20 proser completions fish > ~/.config/fish/completions/proser.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Proser configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 proser config get scan.max_depth\n\
            \x20 proser config list\n\
            \x20 proser config path"
    )]
    Config(ConfigCommands),
}

// ── setup ─────────────────────────────────────────────────────────────────────

/// Arguments for `proser setup`.
#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Existing project directory.
    #[arg(value_name = "TARGET", default_value = ".", help = "Project directory")]
    pub target: PathBuf,

    /// Project type; unknown names fall back to the default.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Project type (fullstack, frontend, backend)"
    )]
    pub project_type: Option<String>,

    /// Pre-filled answers (TOML or JSON).
    #[arg(long = "answers", value_name = "FILE", help = "Answers file")]
    pub answers: Option<PathBuf>,

    /// Override the scan depth for AGENT.md placement.
    #[arg(long = "depth", value_name = "N", help = "Maximum directory depth")]
    pub depth: Option<usize>,

    /// Accept defaults and skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Use defaults and skip confirmation")]
    pub yes: bool,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `proser scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan.
    #[arg(value_name = "TARGET", default_value = ".", help = "Directory to scan")]
    pub target: PathBuf,

    /// Maximum depth (direct children are depth 1).
    #[arg(long = "depth", value_name = "N", help = "Maximum directory depth")]
    pub depth: Option<usize>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ScanFormat,
}

/// Output format for the `scan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScanFormat {
    /// One relative path per line with its depth.
    Table,
    /// JSON array of relative paths.
    Json,
}

// ── types ─────────────────────────────────────────────────────────────────────

/// Arguments for `proser types`.
#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `types` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `proser init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `proser completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// bash, zsh, fish, powershell or elvish
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `proser config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scan.max_depth`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
