//! Implementation of the `proser types` command.

use serde_json::json;

use crate::{
    cli::{ListFormat, OutputFormat, TypesArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TypesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let registry = super::registry(&config, None)?;
    let default = registry.default_name();

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Project Types:")?;
            for t in registry.iter() {
                let marker = if t.name() == default { " (default)" } else { "" };
                output.print(&format!("  {:<10} {}{marker}", t.name(), t.description()))?;
                output.print(&format!("             {}", t.generator_names().join(", ")))?;
            }
        }

        ListFormat::List => {
            for t in registry.iter() {
                output.print(t.name())?;
            }
        }

        ListFormat::Json => {
            let types: Vec<_> = registry
                .iter()
                .map(|t| {
                    json!({
                        "name": t.name(),
                        "description": t.description(),
                        "default": t.name() == default,
                        "generators": t.generator_names(),
                    })
                })
                .collect();
            output.json(&types)?;
        }

        ListFormat::Csv => {
            output.print("name,default,generators")?;
            for t in registry.iter() {
                output.print(&format!(
                    "{},{},{}",
                    t.name(),
                    t.name() == default,
                    t.generator_names().join(";")
                ))?;
            }
        }
    }

    Ok(())
}
