//! `proser config get | list | path`.

use std::collections::BTreeMap;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let as_json = output.format() == OutputFormat::Json;

    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            if as_json {
                return output.json(&BTreeMap::from([(key, value)]));
            }
            output.print(&value)?;
        }
        ConfigCommands::List => {
            let entries = config.entries();
            if as_json {
                return output.json(&entries.into_iter().collect::<BTreeMap<_, _>>());
            }
            let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (key, value) in entries {
                output.print(&format!("{key:<width$} = {value}"))?;
            }
        }
        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }
    Ok(())
}

fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    config
        .get(key)
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })
}
