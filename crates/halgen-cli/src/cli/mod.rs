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
    name    = "halgen",
    bin_name = "halgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} HAL component scaffolding",
    long_about = "Halgen generates matched header/source file pairs for \
                  embedded HAL components, with interface-bound method stubs \
                  selected by component type.",
    after_help = "EXAMPLES:\n\
        \x20 halgen new Uart  --type COM --brief \"UART transport layer\"\n\
        \x20 halgen new Flash --type MEM --brief \"External flash driver\" --output src/hal\n\
        \x20 halgen new io_led --lang c --brief \"Status LED control\"\n\
        \x20 halgen completions bash > /usr/share/bash-completion/completions/halgen",
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
    /// Scaffold a new component file pair.
    #[command(
        visible_alias = "n",
        about = "Scaffold a new component",
        after_help = "EXAMPLES:\n\
            \x20 halgen new Uart    --type COM --brief \"UART transport layer\"\n\
            \x20 halgen new Flash   --type MEM --brief \"External flash driver\"\n\
            \x20 halgen new Logger  --brief \"Log sink\"\n\
            \x20 halgen new io_gpio --lang c --brief \"GPIO register access\""
    )]
    New(NewArgs),

    /// List registered component types.
    #[command(
        visible_alias = "ls",
        about = "List component types",
        after_help = "EXAMPLES:\n\
            \x20 halgen list\n\
            \x20 halgen list --format json\n\
            \x20 halgen list --format csv"
    )]
    List(ListArgs),

    /// Initialise a halgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 halgen init           # write the default config file\n\
            \x20 halgen init --force   # overwrite an existing one"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 halgen completions bash > ~/.local/share/bash-completion/completions/halgen\n\
            \x20 halgen completions zsh  > ~/.zfunc/_halgen\n\
            \x20 halgen completions fish > ~/.config/fish/completions/halgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the halgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 halgen config get defaults.lang\n\
            \x20 halgen config list\n\
            \x20 halgen config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `halgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Component name.  Composed with a recognised `--type` into the file
    /// stem (`COM` + `Uart` becomes `com_uart`); used verbatim otherwise.
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: String,

    /// One-line description placed in the generated file banners.
    #[arg(
        short = 'b',
        long = "brief",
        value_name = "TEXT",
        help = "One-line description for the file banners"
    )]
    pub brief: String,

    /// Component type tag.
    ///
    /// `IO`, `COM`, `MEM`, `CPX`, and `PROC` (case-insensitive) select an
    /// interface binding with its fixed operation set.  Anything else
    /// scaffolds a standalone class.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Component type tag (IO, COM, MEM, CPX, PROC)"
    )]
    pub component_type: Option<String>,

    /// Output dialect.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_enum,
        help = "Output language (default: config defaults.lang, then cpp)"
    )]
    pub lang: Option<Lang>,

    /// Destination directory for the generated pair.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Author recorded in C file banners.
    #[arg(
        long = "author",
        value_name = "NAME",
        help = "Author for the file banner (default: config defaults.author)"
    )]
    pub author: Option<String>,

    /// Overwrite existing files (destructive).
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `halgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
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
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One tag per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `halgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `halgen completions`.
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

/// Subcommands for `halgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.lang`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported output dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Lang {
    /// Also accepted as `c++` or `cxx`.
    #[value(alias = "c++", alias = "cxx")]
    Cpp,
    C,
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpp => write!(f, "cpp"),
            Self::C => write!(f, "c"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
