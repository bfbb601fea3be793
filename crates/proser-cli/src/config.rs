//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. `PROSER_*` environment variables, `__` separating sections
//!    (`PROSER_SCAN__MAX_DEPTH=2`)
//! 3. Config file (`--config FILE`, or the platform config directory)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use proser_adapters::DEFAULT_PROJECT_TYPE;
use proser_core::application::DEFAULT_MAX_DEPTH;

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "PROSER";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for `proser setup`.
    pub defaults: Defaults,
    /// Directory scan settings.
    pub scan: ScanConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub project_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Deepest directory level that receives an AGENT.md.
    pub max_depth: usize,
    /// Directory names skipped in addition to the built-in list.
    pub extra_skip_dirs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                project_type: DEFAULT_PROJECT_TYPE.into(),
            },
            scan: ScanConfig {
                max_depth: DEFAULT_MAX_DEPTH,
                extra_skip_dirs: Vec::new(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load the layered configuration.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        Self::load_with(config_file.map(PathBuf::as_path), env_source())
    }

    fn load_with(config_file: Option<&Path>, env: Environment) -> CliResult<Self> {
        let defaults = serde_json::to_string(&Self::default())
            .map_err(|e| config_error("serialising defaults", e))?;

        let mut builder = Config::builder().add_source(File::from_str(&defaults, FileFormat::Json));

        builder = match config_file {
            Some(path) if !path.is_file() => {
                return Err(CliError::config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::from(Self::config_path()).required(false)),
        };

        builder
            .add_source(env)
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Self>())
            .map_err(|e| config_error("loading configuration", e))
    }

    /// Path to the default configuration file.
    ///
    /// Falls back to `.proser.toml` in the current directory when no home
    /// directory can be determined.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "proser", "proser")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".proser.toml"))
    }

    /// Look up a dotted key such as `scan.max_depth`.
    pub fn get(&self, key: &str) -> Option<String> {
        let tree = serde_json::to_value(self).ok()?;
        key.split('.')
            .try_fold(&tree, |node, segment| node.get(segment))
            .filter(|value| !value.is_object())
            .map(render_value)
    }

    /// Every leaf setting as `(dotted key, value)`, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Ok(tree) = serde_json::to_value(self) {
            flatten("", &tree, &mut out);
        }
        out
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("scan.extra_skip_dirs")
}

fn config_error(what: &str, err: impl std::error::Error + Send + Sync + 'static) -> CliError {
    CliError::ConfigError {
        message: format!("{what}: {err}"),
        source: Some(Box::new(err)),
    }
}

fn flatten(prefix: &str, node: &Value, out: &mut Vec<(String, String)>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        leaf => out.push((prefix.to_string(), render_value(leaf))),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
