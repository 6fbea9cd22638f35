//! Flags shared by `check`, `resolve`, `init`, `config` and `completions`.
//!
//! Flattened into [`super::Cli`] with `global = true`, so they may appear
//! before or after the subcommand name.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level for redirect decisions on stderr.
    ///
    /// Rejected targets are logged at WARN without any flag. `-v` adds
    /// INFO and `-vv` logs every accept/fallback decision.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more about each redirect decision (-v, -vv, -vvv)",
        long_help = "Log more about each redirect decision on stderr:
    (none)  - rejected redirect targets only
    -v      - command progress
    -vv     - every accept and fallback decision
    -vvv    - trace level"
    )]
    pub verbose: u8,

    /// Drop summaries and notices.  Verdicts and resolved locations are
    /// still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only verdicts and locations, plus errors"
    )]
    pub quiet: bool,

    /// Plain ✓/✗ markers and error text.  `NO_COLOR` in the environment
    /// sets this too.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Do not colour verdicts or errors"
    )]
    pub no_color: bool,

    /// TOML file holding `redirect.default_path` and output settings.
    ///
    /// Must exist.  Replaces `./.yourfavs.toml` and the platform file;
    /// `YOURFAVS__*` variables still apply on top.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default locations"
    )]
    pub config: Option<PathBuf>,

    /// Rendering of verdicts, locations and log lines.  `auto` defers to
    /// `output.format` in the config, then to whether stdout is a terminal.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to render verdicts and locations"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Use `output.format` from the config, else human on a terminal and
    /// plain when piped.
    #[default]
    Auto,
    /// Coloured ✓/✗ verdict lines.
    Human,
    /// One uncoloured verdict or location per line.
    Plain,
    /// One JSON document on stdout, JSON log lines on stderr.
    Json,
}
