//! `yourfavs config`: inspect configuration values.

use std::collections::BTreeMap;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config
                .get(&key)
                .ok_or_else(|| CliError::UnknownConfigKey { key: key.clone() })?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                let entries: BTreeMap<_, _> = config.entries().into_iter().collect();
                output.json(&entries)?;
            } else {
                output.header("Current configuration:")?;
                for (key, value) in config.entries() {
                    output.data(&format!("{key} = {value:?}"))?;
                }
            }
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}
