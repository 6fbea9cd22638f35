//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use yourfavs_core::domain::AuthFlow;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "yourfavs",
    bin_name = "yourfavs",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Redirect target validation for YourFavs auth flows",
    long_about = "Checks `redirectTo` values the way the YourFavs login, signup \
                  and password flows do before redirecting, and shows where \
                  each candidate would really send the user.",
    after_help = "EXAMPLES:\n\
        \x20 yourfavs check /dashboard //evil.com\n\
        \x20 yourfavs check --strict < candidates.txt\n\
        \x20 yourfavs resolve '/lists/42' --flow signup\n\
        \x20 yourfavs completions bash > /usr/share/bash-completion/completions/yourfavs",
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
    /// Report whether redirect candidates are accepted.
    #[command(
        visible_alias = "c",
        about = "Check redirect candidates",
        after_help = "EXAMPLES:\n\
            \x20 yourfavs check /dashboard\n\
            \x20 yourfavs check '/%2f%2fevil.com' 'javascript:alert(1)'\n\
            \x20 cat access-log-targets.txt | yourfavs check --strict"
    )]
    Check(CheckArgs),

    /// Print the location an auth flow would redirect to.
    #[command(
        visible_alias = "r",
        about = "Resolve a redirect target",
        after_help = "EXAMPLES:\n\
            \x20 yourfavs resolve /lists/42\n\
            \x20 yourfavs resolve //evil.com --flow password-update\n\
            \x20 yourfavs resolve --default /welcome"
    )]
    Resolve(ResolveArgs),

    /// Initialise a YourFavs configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 yourfavs init           # platform config directory\n\
            \x20 yourfavs init --local   # .yourfavs.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 yourfavs completions bash > ~/.local/share/bash-completion/completions/yourfavs\n\
            \x20 yourfavs completions zsh  > ~/.zfunc/_yourfavs\n\
            \x20 yourfavs completions fish > ~/.config/fish/completions/yourfavs.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the YourFavs configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 yourfavs config get redirect.default_path\n\
            \x20 yourfavs config list\n\
            \x20 yourfavs config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `yourfavs check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Candidates to check.  Read one per line from stdin when omitted.
    #[arg(value_name = "CANDIDATE", help = "Redirect candidates (default: stdin)")]
    pub candidates: Vec<String>,

    /// Exit with status 2 if any candidate is rejected.
    #[arg(long = "strict", help = "Fail if any candidate is rejected")]
    pub strict: bool,
}

// ── resolve ───────────────────────────────────────────────────────────────────

/// Arguments for `yourfavs resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// The `redirectTo` value.  Omit to resolve an absent parameter.
    #[arg(value_name = "CANDIDATE", help = "Redirect candidate (omit for none)")]
    pub candidate: Option<String>,

    /// Auth flow issuing the redirect.
    #[arg(
        short = 'f',
        long = "flow",
        value_enum,
        default_value = "login",
        help = "Auth flow issuing the redirect"
    )]
    pub flow: Flow,

    /// Override the configured default path.
    #[arg(
        short = 'd',
        long = "default",
        value_name = "PATH",
        help = "Fallback path (overrides redirect.default_path)"
    )]
    pub default: Option<String>,
}

/// Auth flows, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Flow {
    #[value(alias = "signin")]
    Login,
    #[value(alias = "sign-up")]
    Signup,
    #[value(alias = "reset")]
    PasswordReset,
    #[value(alias = "update-password")]
    PasswordUpdate,
}

impl From<Flow> for AuthFlow {
    fn from(flow: Flow) -> Self {
        match flow {
            Flow::Login => AuthFlow::Login,
            Flow::Signup => AuthFlow::Signup,
            Flow::PasswordReset => AuthFlow::PasswordReset,
            Flow::PasswordUpdate => AuthFlow::PasswordUpdate,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `yourfavs init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.yourfavs.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `yourfavs completions`.
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

/// Subcommands for `yourfavs config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `redirect.default_path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
