use proser_core::{
    application::{GenerateContext, Generator},
    domain::{GeneratedFiles, OutputNamespace},
    error::ProserResult,
};

use super::{Doc, rel, stack_label};

const PATH: &str = "AGENTS.md";

const PROSE_URL: &str = "https://danielmeppiel.github.io/awesome-ai-native/docs/prose/";

/// Root discovery file. Deliberately short: it scaffolds the structure and
/// hands the user a prompt to complete it with their agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentsMdGenerator;

impl Generator for AgentsMdGenerator {
    fn name(&self) -> &'static str {
        "agents-md"
    }

    fn namespace(&self) -> OutputNamespace {
        OutputNamespace::file(PATH)
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let cfg = ctx.config();
        let general = &cfg.general;

        let mut doc = Doc::new()
            .h1(&general.project_name)
            .when(!general.description.is_empty(), |d| d.para(&general.description));

        if cfg.has_backend() || cfg.has_frontend() {
            doc = doc.h2("Tech Stack");
            if let Some(b) = &cfg.backend {
                doc = doc.bullet(&format!("**Backend**: {}", stack_label(&b.language, &b.framework)));
            }
            if let Some(f) = &cfg.frontend {
                doc = doc.bullet(&format!("**Frontend**: {}", stack_label(&f.language, &f.framework)));
            }
            if let Some(db) = cfg.backend.as_ref().map(|b| &b.database).filter(|d| !d.is_empty()) {
                doc = doc.bullet(&format!("**Database**: {}", db));
            }
            doc = doc.blank();
        }

        let api_rules = cfg.backend.as_ref().map(|b| b.api_rules.as_str()).unwrap_or("");
        let testing = &cfg.testing;

        let doc = doc
            .h2("Conventions")
            .when(!general.code_style.is_empty(), |d| {
                d.bullet(&format!("Code style: {}", general.code_style))
            })
            .when(!api_rules.is_empty(), |d| d.bullet(&format!("API design: {}", api_rules)))
            .when(!general.security.is_empty(), |d| {
                d.bullet(&format!("Security: {}", general.security))
            })
            .when(!testing.framework.is_empty(), |d| {
                if testing.strategy.is_empty() {
                    d.bullet(&format!("Testing: {}", testing.framework))
                } else {
                    d.bullet(&format!("Testing: {} ({})", testing.framework, testing.strategy))
                }
            })
            .blank()
            .h2("Next Steps")
            .blank()
            .line("This file was scaffolded by proser.")
            .para("Use the prompt below with your AI agent to fill it out:")
            .line("```text")
            .line("Read the AGENTS.md file in this project and the PROSE specification at")
            .line(PROSE_URL)
            .blank()
            .line("Then analyze this repository and rewrite AGENTS.md to follow the PROSE")
            .line("Explicit Hierarchy convention. Include:")
            .blank()
            .bullets([
                "A brief project overview and architecture summary",
                "Key directories and what they own",
                "Domain-specific coding conventions and patterns",
                "How to build, test, and run the project",
                "Any guardrails or things agents should avoid",
            ])
            .blank()
            .line("Keep it concise. Remove this prompt section when you are done.")
            .line("```")
            .blank()
            .line(&format!("Learn more: {}", PROSE_URL));

        Ok(GeneratedFiles::new().with_file(rel(PATH)?, doc.finish())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_util::{backend, ctx, full_config, general};
    use proser_core::domain::ProjectConfig;

    fn render(cfg: ProjectConfig) -> String {
        let files = AgentsMdGenerator.generate(&ctx(cfg)).unwrap();
        assert_eq!(files.len(), 1);
        files.get(PATH).unwrap().content.clone()
    }

    #[test]
    fn backend_only_mentions_backend_language() {
        let text = render(ProjectConfig::new(general()).with_backend(backend("go")));
        assert!(text.starts_with("# demo\n\nA demo project\n"));
        assert!(text.contains("**Backend**: go (Gin)"));
        assert!(!text.contains("**Frontend**"));
        assert!(!text.contains("TypeScript"));
    }

    #[test]
    fn fullstack_lists_both() {
        let text = render(full_config());
        assert!(text.contains("**Frontend**: TypeScript (React)"));
        assert!(text.contains("Testing: Jest (Unit and integration)"));
    }

    #[test]
    fn minimal_config_skips_stack() {
        let text = render(ProjectConfig::default());
        assert!(!text.contains("## Tech Stack"));
        assert!(text.contains("## Next Steps"));
    }
}
