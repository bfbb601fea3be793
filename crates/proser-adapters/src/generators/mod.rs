//! Built-in generators.
//!
//! Each generator owns a disjoint slice of the target tree and self-guards on
//! the config sections it needs. Content is plain Markdown assembled with
//! [`Doc`].

mod agent_md;
mod agents;
mod agents_md;
mod copilot_instructions;
mod instructions;
pub mod languages;
mod prompts;
mod specs;

pub use agent_md::{AGENT_MD_FILE, AgentMdGenerator};
pub use agents::AgentsGenerator;
pub use agents_md::AgentsMdGenerator;
pub use copilot_instructions::CopilotInstructionsGenerator;
pub use instructions::{
    BackendInstructionsGenerator, FrontendInstructionsGenerator, TestingInstructionsGenerator,
};
pub use prompts::PromptsGenerator;
pub use specs::SpecsGenerator;

use proser_core::{domain::RelativePath, error::ProserResult};

pub(crate) const INSTRUCTIONS_DIR: &str = ".github/instructions";
pub(crate) const AGENTS_DIR: &str = ".github/agents";
pub(crate) const PROMPTS_DIR: &str = ".github/prompts";
pub(crate) const SPECS_DIR: &str = ".github/specs";

/// Line-oriented Markdown builder.
#[derive(Debug, Default)]
pub(crate) struct Doc {
    buf: String,
}

impl Doc {
    pub fn new() -> Self {
        Self::default()
    }

    /// YAML front matter block. Values are written verbatim.
    pub fn front_matter(mut self, fields: &[(&str, &str)]) -> Self {
        self.buf.push_str("---\n");
        for (key, value) in fields {
            self.buf.push_str(key);
            self.buf.push_str(": ");
            self.buf.push_str(value);
            self.buf.push('\n');
        }
        self.buf.push_str("---\n");
        self
    }

    pub fn h1(self, text: &str) -> Self {
        self.line(&format!("# {}", text)).blank()
    }

    /// Section heading; no blank line after, sections open straight into
    /// their content.
    pub fn h2(self, text: &str) -> Self {
        self.line(&format!("## {}", text))
    }

    pub fn h3(self, text: &str) -> Self {
        self.line(&format!("### {}", text))
    }

    pub fn line(mut self, text: &str) -> Self {
        self.buf.push_str(text);
        self.buf.push('\n');
        self
    }

    pub fn para(self, text: &str) -> Self {
        self.line(text).blank()
    }

    pub fn bullet(self, text: &str) -> Self {
        self.line(&format!("- {}", text))
    }

    pub fn bullets<'a>(mut self, items: impl IntoIterator<Item = &'a str>) -> Self {
        for item in items {
            self = self.bullet(item);
        }
        self
    }

    pub fn checkbox(self, text: &str) -> Self {
        self.line(&format!("- [ ] {}", text))
    }

    pub fn checkboxes<'a>(mut self, items: impl IntoIterator<Item = &'a str>) -> Self {
        for item in items {
            self = self.checkbox(item);
        }
        self
    }

    pub fn numbered<'a>(mut self, items: impl IntoIterator<Item = &'a str>) -> Self {
        for (i, item) in items.into_iter().enumerate() {
            self = self.line(&format!("{}. {}", i + 1, item));
        }
        self
    }

    pub fn blank(mut self) -> Self {
        self.buf.push('\n');
        self
    }

    /// Conditionally apply a block.
    pub fn when(self, cond: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if cond { f(self) } else { self }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Relative path from a literal or formatted string.
pub(crate) fn rel(path: impl AsRef<str>) -> ProserResult<RelativePath> {
    Ok(RelativePath::try_new(path.as_ref())?)
}

/// Framework answers that mean "no framework".
pub(crate) fn meaningful_framework(framework: &str) -> Option<&str> {
    let trimmed = framework.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" | "none" | "vanilla" => None,
        _ => Some(trimmed),
    }
}

/// `language` or `language (framework)`.
pub(crate) fn stack_label(language: &str, framework: &str) -> String {
    match meaningful_framework(framework) {
        Some(fw) => format!("{} ({})", language, fw),
        None => language.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::path::Path;
    use std::sync::Arc;

    use proser_core::application::GenerateContext;
    use proser_core::domain::{
        AgentsConfig, BackendConfig, FrontendConfig, GeneralConfig, ProjectConfig, PromptsConfig,
        SpecsConfig, TestingConfig,
    };

    use crate::storage::MemoryStorage;

    pub fn general() -> GeneralConfig {
        GeneralConfig {
            project_name: "demo".into(),
            description: "A demo project".into(),
            code_style: "Keep functions short".into(),
            security: "Validate all input".into(),
            custom_rules: String::new(),
        }
    }

    pub fn backend(language: &str) -> BackendConfig {
        BackendConfig {
            language: language.into(),
            framework: "Gin".into(),
            database: "PostgreSQL".into(),
            api_rules: "REST with JSON".into(),
        }
    }

    pub fn frontend() -> FrontendConfig {
        FrontendConfig {
            language: "TypeScript".into(),
            framework: "React".into(),
            build_tool: "Vite".into(),
        }
    }

    /// Frontend, backend and every feature toggle on.
    pub fn full_config() -> ProjectConfig {
        ProjectConfig::new(general())
            .with_frontend(frontend())
            .with_backend(backend("Go"))
            .with_testing(TestingConfig {
                framework: "Jest".into(),
                strategy: "Unit and integration".into(),
            })
            .with_agents(AgentsConfig {
                architect: true,
                frontend: true,
                backend: true,
                code_reviewer: true,
                technical_writer: true,
                devops: true,
                tester: true,
            })
            .with_prompts(PromptsConfig {
                code_review: true,
                feature_spec: true,
                refactor: true,
                bug_fix: true,
                pr_description: true,
            })
            .with_specs(SpecsConfig {
                feature_template: true,
                api_endpoint: true,
                component: true,
            })
    }

    pub fn ctx(config: ProjectConfig) -> GenerateContext {
        ctx_with(config, MemoryStorage::new(), "/proj")
    }

    pub fn ctx_with(config: ProjectConfig, storage: MemoryStorage, root: &str) -> GenerateContext {
        GenerateContext::new(config, Path::new(root), Arc::new(storage))
    }
}
