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
    name    = "herald",
    bin_name = "herald",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Fill ${placeholders} in message templates",
    long_about = "Herald substitutes ${name} placeholders in message templates \
                  and packs a payload together with its display text.",
    after_help = "EXAMPLES:\n\
        \x20 herald render 'Hello ${name}' --set name=David\n\
        \x20 herald render -f welcome.txt -d values.json --strict\n\
        \x20 herald compose 'We have a new baby.' --payload '{\"kind\":\"birth\"}'\n\
        \x20 herald completions bash > /usr/share/bash-completion/completions/herald",
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
    /// Interpolate a template.
    #[command(
        visible_aliases = ["interpolate", "r"],
        about = "Substitute placeholders in a template",
        after_help = "EXAMPLES:\n\
            \x20 herald render 'Hi ${name}, you are ${age}' -s name=David -s age=95\n\
            \x20 herald render -f template.txt -d defaults.toml -d overrides.json\n\
            \x20 echo 'Hi ${name}' | herald render --set name=Luz"
    )]
    Render(RenderArgs),

    /// Join a payload and display text.
    #[command(
        about = "Compose a payload and display text into one message",
        after_help = "EXAMPLES:\n\
            \x20 herald compose 'Hello everyone.' --payload '{\"fake\": 4}'\n\
            \x20 herald compose 'Hello everyone.' --payload-file payload.json"
    )]
    Compose(ComposeArgs),

    /// Split a composed message.
    #[command(
        about = "Split a composed message into payload and display text",
        after_help = "EXAMPLES:\n\
            \x20 herald split < message.txt\n\
            \x20 herald split --output-format json < message.txt"
    )]
    Split(SplitArgs),

    /// List placeholders in a template.
    #[command(
        visible_alias = "ls",
        about = "List the placeholders a template uses",
        after_help = "EXAMPLES:\n\
            \x20 herald placeholders 'Hi ${name}, you are ${age}'\n\
            \x20 herald placeholders -f template.txt --output-format json"
    )]
    Placeholders(PlaceholdersArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 herald completions bash > ~/.local/share/bash-completion/completions/herald\n\
            \x20 herald completions zsh  > ~/.zfunc/_herald\n\
            \x20 herald completions fish > ~/.config/fish/completions/herald.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Herald configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 herald config get render.strict\n\
            \x20 herald config list\n\
            \x20 herald config path"
    )]
    Config(ConfigCommands),
}

// ── template input ────────────────────────────────────────────────────────────

/// Where a template comes from: an argument, a file, or stdin.
#[derive(Debug, Clone, Args)]
pub struct TemplateInput {
    /// Template text.  Omit (or pass `-`) to read stdin.
    #[arg(value_name = "TEMPLATE", help = "Template text ('-' or omitted: stdin)")]
    pub template: Option<String>,

    /// Read the template from a file.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        conflicts_with = "template",
        help = "Read the template from FILE"
    )]
    pub file: Option<PathBuf>,
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `herald render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: TemplateInput,

    /// JSON or TOML files with values; later files override earlier ones.
    #[arg(
        short = 'd',
        long = "values",
        value_name = "FILE",
        action = clap::ArgAction::Append,
        help = "Load values from a JSON or TOML file (repeatable)"
    )]
    pub values: Vec<PathBuf>,

    /// Inline values; these override every file.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        action = clap::ArgAction::Append,
        help = "Set a value (repeatable)"
    )]
    pub set: Vec<String>,

    /// Fail on malformed templates and on placeholders without a value.
    #[arg(long = "strict", help = "Fail instead of leaving placeholders untouched")]
    pub strict: bool,

    /// Prompt for every placeholder that has no value.
    #[arg(
        short = 'i',
        long = "interactive",
        help = "Prompt for missing values"
    )]
    pub interactive: bool,
}

// ── compose ───────────────────────────────────────────────────────────────────

/// Arguments for `herald compose`.
#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Human-readable text shown to the recipient.
    #[arg(value_name = "DISPLAY", help = "Display text")]
    pub display: String,

    /// Machine-readable payload.
    #[arg(
        short = 'p',
        long = "payload",
        value_name = "PAYLOAD",
        required_unless_present = "payload_file",
        conflicts_with = "payload_file",
        help = "Payload text"
    )]
    pub payload: Option<String>,

    /// Read the payload from a file.
    #[arg(
        long = "payload-file",
        value_name = "FILE",
        help = "Read the payload from FILE"
    )]
    pub payload_file: Option<PathBuf>,
}

// ── split ─────────────────────────────────────────────────────────────────────

/// Arguments for `herald split`.
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Composed message.  Omit (or pass `-`) to read stdin.
    #[arg(value_name = "MESSAGE", help = "Composed message ('-' or omitted: stdin)")]
    pub message: Option<String>,
}

// ── placeholders ──────────────────────────────────────────────────────────────

/// Arguments for `herald placeholders`.
#[derive(Debug, Args)]
pub struct PlaceholdersArgs {
    #[command(flatten)]
    pub input: TemplateInput,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `herald completions`.
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

/// Subcommands for `herald config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `render.strict`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
