//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`RedirectPolicy`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`YOURFAVS__REDIRECT__DEFAULT_PATH`, ...)
//! 3. `--config FILE` if given, otherwise `./.yourfavs.toml` then the
//!    platform config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use yourfavs_core::domain::{DefaultPath, RedirectPolicy};

use crate::error::{CliError, CliResult};

/// File name used by `init --local` and picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".yourfavs.toml";

const ENV_PREFIX: &str = "YOURFAVS";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Redirect resolution settings.
    pub redirect: RedirectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Where auth flows send the user when the candidate is rejected.
    pub default_path: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            default_path: DefaultPath::DASHBOARD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.  `--output-format` wins if given.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// `config_file` is the path passed via `--config`.  When given it must
    /// exist and replaces the default file locations.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound { path: path.clone() });
                }
                builder = builder.add_source(toml_file(path, true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(&Self::config_path(), false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE), false));
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)
    }

    /// Build the redirect policy, validating the default path.
    ///
    /// `override_default` (from `--default`) takes precedence over the
    /// configured value.
    pub fn redirect_policy(&self, override_default: Option<&str>) -> CliResult<RedirectPolicy> {
        let raw = override_default.unwrap_or(&self.redirect.default_path);
        let default_path = DefaultPath::parse(raw).map_err(|e| CliError::Core(e.into()))?;
        Ok(RedirectPolicy::new(default_path))
    }

    /// Look up a single value by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "redirect.default_path" => Some(self.redirect.default_path.clone()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Every configuration key paired with its current value.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)))
            .collect()
    }

    pub const KEYS: [&'static str; 3] =
        ["redirect.default_path", "output.no_color", "output.format"];

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.yourfavs.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("app", "yourfavs", "yourfavs")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Render as TOML, as written by `init`.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: "could not serialise configuration".into(),
            source: Some(Box::new(e)),
        })
    }
}

fn toml_file(path: &Path, required: bool) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml).required(required)
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
