//! Per-directory `AGENT.md` guidance.

use std::path::Path;

use proser_core::{
    application::{DirectoryScanner, GenerateContext, Generator, WritePolicy},
    domain::{GeneratedFiles, OutputNamespace, ProjectConfig, RelativePath},
    error::ProserResult,
};
use tracing::debug;

use super::Doc;

pub const AGENT_MD_FILE: &str = "AGENT.md";

/// Places one `AGENT.md` in every directory the scanner selects.
///
/// The only generator that reads storage. Writes are best-effort: a
/// directory that refuses the file is reported as a warning.
#[derive(Debug, Clone, Default)]
pub struct AgentMdGenerator {
    scanner: DirectoryScanner,
}

impl AgentMdGenerator {
    pub fn new(scanner: DirectoryScanner) -> Self {
        Self { scanner }
    }

    pub fn scanner(&self) -> &DirectoryScanner {
        &self.scanner
    }
}

impl Generator for AgentMdGenerator {
    fn name(&self) -> &'static str {
        "agent-md"
    }

    fn namespace(&self) -> OutputNamespace {
        OutputNamespace::per_directory(AGENT_MD_FILE)
    }

    fn write_policy(&self) -> WritePolicy {
        WritePolicy::BestEffort
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let root = ctx.root();
        let dirs = self.scanner.scan(ctx.storage(), root)?;

        let mut files = GeneratedFiles::new();
        for dir in dirs {
            let Ok(rel) = dir.strip_prefix(root) else {
                debug!(dir = %dir.display(), "Directory outside root, skipping");
                continue;
            };
            let rel = RelativePath::try_new(rel)?;
            let content = render(&rel, ctx.config());
            files.add(rel.join(AGENT_MD_FILE)?, content)?;
        }
        Ok(files)
    }
}

fn render(dir: &RelativePath, cfg: &ProjectConfig) -> String {
    let name = dir
        .as_path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let general = &cfg.general;
    let api_rules = cfg.backend.as_ref().map(|b| b.api_rules.as_str()).unwrap_or("");

    Doc::new()
        .h1(&format!("Agent Instructions for {}", name))
        .h2("Directory Context")
        .para(&format!(
            "This directory is part of the {} project located at: {}",
            general.project_name,
            display_slash(dir.as_path())
        ))
        .h2("Purpose")
        .para(&format!("This directory contains code and resources related to: {}", name))
        .h2("Guidelines")
        .blank()
        .when(!general.code_style.is_empty(), |d| {
            d.h3("Code Style").para(&general.code_style)
        })
        .when(!api_rules.is_empty(), |d| d.h3("API Rules").para(api_rules))
        .when(!general.security.is_empty(), |d| {
            d.h3("Security").para(&general.security)
        })
        .h2("Working in This Directory")
        .blank()
        .line("When making changes in this directory:")
        .blank()
        .numbered([
            "Understand the purpose and scope of files here",
            "Follow the project-wide guidelines in /.github/copilot-instructions.md",
            "Keep changes consistent with the parent directory structure",
            "Update documentation if you modify public interfaces",
            "Add or update tests as needed",
        ])
        .blank()
        .h2("Testing")
        .bullets([
            "Tests for this directory should be located nearby",
            "Run tests before committing changes",
        ])
        .blank()
        .h2("Documentation")
        .line("Keep inline documentation up-to-date and clear.")
        .finish()
}

/// Forward-slash rendering so content does not depend on the host.
fn display_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
