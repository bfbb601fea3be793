use proser_core::{
    application::{GenerateContext, Generator},
    domain::{GeneratedFiles, OutputNamespace},
    error::ProserResult,
};

use super::{Doc, INSTRUCTIONS_DIR, meaningful_framework, rel};

const PATH: &str = ".github/copilot-instructions.md";

/// Global repository instructions at `.github/copilot-instructions.md`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopilotInstructionsGenerator;

impl Generator for CopilotInstructionsGenerator {
    fn name(&self) -> &'static str {
        "copilot-instructions"
    }

    fn namespace(&self) -> OutputNamespace {
        OutputNamespace::file(PATH)
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let cfg = ctx.config();
        let general = &cfg.general;
        let has_stack = cfg.has_frontend() || cfg.has_backend();

        let overview = if general.description.is_empty() {
            "This project follows PROSE conventions for AI-native development."
        } else {
            general.description.as_str()
        };

        let mut doc = Doc::new()
            .h1("Global Repository Instructions")
            .h2("Project Overview")
            .para(overview);

        if has_stack {
            doc = doc.h2("Technology Stack");
            if let Some(backend) = &cfg.backend {
                doc = doc.bullet(&with_framework("**Backend**", &backend.language, &backend.framework));
            }
            if let Some(frontend) = &cfg.frontend {
                doc = doc.bullet(&with_framework("**Frontend**", &frontend.language, &frontend.framework));
            }
            if let Some(db) = cfg.backend.as_ref().map(|b| &b.database).filter(|d| !d.is_empty()) {
                doc = doc.bullet(&format!("**Database**: {}", db));
            }
            if !cfg.testing.framework.is_empty() {
                doc = doc.bullet(&format!("**Testing**: {}", cfg.testing.framework));
            }
            doc = doc.blank();
        }

        let api_rules = cfg.backend.as_ref().map(|b| b.api_rules.as_str()).unwrap_or("");
        let custom = meaningful_framework(&general.custom_rules).unwrap_or("");

        doc = doc
            .when(!general.code_style.is_empty(), |d| {
                d.h2("Code Style").para(&general.code_style)
            })
            .when(!api_rules.is_empty(), |d| d.h2("API Guidelines").para(api_rules))
            .when(!general.security.is_empty(), |d| {
                d.h2("Security Requirements").para(&general.security)
            })
            .when(!custom.is_empty(), |d| d.h2("Custom Project Rules").para(custom));

        if has_stack || !cfg.testing.framework.is_empty() {
            doc = doc
                .h2("Instructions Hierarchy")
                .line("This file provides global context. Specialized instructions:")
                .when(cfg.has_backend(), |d| {
                    d.bullet(&format!("[Backend Development]({}/backend.instructions.md)", INSTRUCTIONS_DIR))
                })
                .when(cfg.has_frontend(), |d| {
                    d.bullet(&format!("[Frontend Development]({}/frontend.instructions.md)", INSTRUCTIONS_DIR))
                })
                .when(!cfg.testing.framework.is_empty(), |d| {
                    d.bullet(&format!("[Testing Guidelines]({}/testing.instructions.md)", INSTRUCTIONS_DIR))
                })
                .blank();
        }

        GeneratedFiles::new()
            .with_file(rel(PATH)?, doc.finish())
            .map_err(Into::into)
    }
}

fn with_framework(label: &str, language: &str, framework: &str) -> String {
    match meaningful_framework(framework) {
        Some(fw) => format!("{}: {} with {}", label, language, fw),
        None => format!("{}: {}", label, language),
    }
}
