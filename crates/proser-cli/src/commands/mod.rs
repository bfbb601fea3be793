//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into calls on `proser-core` and
//! `proser-adapters` and render the results. No generation logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod scan;
pub mod setup;
pub mod types;

use std::path::{Path, PathBuf};

use proser_adapters::builtin_registry;
use proser_core::{
    application::ProjectTypeRegistry,
    domain::SkipList,
    error::ProserError,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Canonicalise `target` and require it to be an existing directory.
pub(crate) fn resolve_target(target: &Path) -> CliResult<PathBuf> {
    let resolved = target.canonicalize().map_err(|e| CliError::InvalidTarget {
        path: target.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !resolved.is_dir() {
        return Err(CliError::InvalidTarget {
            path: target.to_path_buf(),
            reason: "not a directory".into(),
        });
    }
    Ok(resolved)
}

/// Built-in skip list extended with `scan.extra_skip_dirs`.
pub(crate) fn skip_list(config: &AppConfig) -> SkipList {
    SkipList::default().with_extra(&config.scan.extra_skip_dirs)
}

/// Registry of built-in project types using the effective scan settings.
pub(crate) fn registry(config: &AppConfig, depth: Option<usize>) -> CliResult<ProjectTypeRegistry> {
    let max_depth = depth.unwrap_or(config.scan.max_depth);
    builtin_registry(max_depth, skip_list(config))
        .map_err(|e| CliError::Core(ProserError::from(e)))
}
