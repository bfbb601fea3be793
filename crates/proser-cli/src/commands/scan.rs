//! Implementation of the `proser scan` command.

use std::path::{Path, PathBuf};

use tracing::instrument;

use proser_adapters::LocalStorage;
use proser_core::application::DirectoryScanner;

use crate::{
    cli::{OutputFormat, ScanArgs, ScanFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// List the directories that `setup` would give an AGENT.md.
#[instrument(skip_all, fields(target = %args.target.display()))]
pub fn execute(args: ScanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = super::resolve_target(&args.target)?;
    let depth = args.depth.unwrap_or(config.scan.max_depth);
    let scanner = DirectoryScanner::new(depth, super::skip_list(&config));

    let found = scanner.scan(&LocalStorage::new(), &root)?;
    let relative = relativize(&root, &found);

    if args.format == ScanFormat::Json || output.format() == OutputFormat::Json {
        return output.json(&relative);
    }

    output.header(&format!(
        "{} directories under {} (max depth {depth})",
        relative.len(),
        root.display()
    ))?;
    for path in &relative {
        let level = path.matches('/').count() + 1;
        output.print(&format!("  {level}  {path}"))?;
    }
    Ok(())
}

/// Root-relative paths with `/` separators on every platform.
fn relativize(root: &Path, found: &[PathBuf]) -> Vec<String> {
    found
        .iter()
        .filter_map(|p| p.strip_prefix(root).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relativize_uses_forward_slashes() {
        let root = Path::new("/proj");
        let found = vec![root.join("a"), root.join("a").join("b"), PathBuf::from("/elsewhere")];
        assert_eq!(relativize(root, &found), ["a", "a/b"]);
    }
}
