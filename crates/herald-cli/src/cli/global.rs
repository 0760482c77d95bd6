//! Flags shared by every `herald` subcommand.
//!
//! They only shape *how* results are reported (log level, colour, format)
//! and where settings come from; no command reads them to decide *what* to
//! render.

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};

/// Global flags, flattened into [`super::Cli`].
#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// Log level: WARN by default, then INFO, DEBUG, TRACE per `-v`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "More diagnostics on stderr:
    -v      - which value sources loaded, unresolved placeholders
    -vv     - template parsing and fallback decisions
    -vvv    - everything
Also adds the cause chain to error reports. RUST_LOG overrides the level."
    )]
    pub verbose: u8,

    /// Only results and errors are written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print results and errors only"
    )]
    pub quiet: bool,

    /// Plain text everywhere.
    ///
    /// `NO_COLOR` follows <https://no-color.org>: any non-empty value other
    /// than a falsey one (`0`, `false`, `no`, `off`) turns colour off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Never colour output"
    )]
    pub no_color: bool,

    /// Settings file to use instead of the per-user `config.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE (must exist)"
    )]
    pub config: Option<PathBuf>,

    /// Shape of what lands on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Result format on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Result format. `Auto` defers to `output.format` in the config, then to
/// whether stdout is a terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Labels, headers and colour.
    Human,
    /// Bare results, one per line; safe to pipe.
    Plain,
    /// Pretty-printed JSON documents.
    Json,
}
