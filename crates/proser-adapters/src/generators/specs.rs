//! Specification templates under `.github/specs`.

use proser_core::{
    application::{GenerateContext, Generator},
    domain::{GeneratedFiles, OutputNamespace, ProjectConfig},
    error::ProserResult,
};

use super::{Doc, SPECS_DIR, stack_label, rel};

/// Feature, API endpoint and component spec templates.
///
/// `api-endpoint` needs a backend and `component` needs a frontend.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecsGenerator;

impl Generator for SpecsGenerator {
    fn name(&self) -> &'static str {
        "specs"
    }

    fn namespace(&self) -> OutputNamespace {
        OutputNamespace::directory(SPECS_DIR)
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let cfg = ctx.config();
        let mut files = GeneratedFiles::new();
        let Some(specs) = cfg.specs else {
            return Ok(files);
        };

        let path = |name: &str| rel(format!("{}/{}.spec.md", SPECS_DIR, name));

        if specs.feature_template {
            files.add(path("feature-template")?, feature_template())?;
        }
        if specs.api_endpoint && cfg.has_backend() {
            files.add(path("api-endpoint")?, api_endpoint(cfg))?;
        }
        if specs.component && cfg.has_frontend() {
            files.add(path("component")?, component(cfg))?;
        }
        Ok(files)
    }
}

fn feature_template() -> String {
    Doc::new()
        .h1("Feature: [Feature Name]")
        .h2("Problem Statement")
        .para("[What user need or business requirement does this address?]")
        .h2("Proposed Solution")
        .para("[What is being built and how does it solve the problem?]")
        .h2("User Stories")
        .para("As a [user type], I want to [action] so that [benefit].")
        .h2("Acceptance Criteria")
        .checkboxes(["[Criterion 1]", "[Criterion 2]"])
        .blank()
        .h2("Implementation Plan")
        .checkboxes(["Data models: `[file path]`", "Business logic: `[file path]`", "Tests: `[file path]`"])
        .blank()
        .h2("Out of Scope")
        .bullet("[What this feature deliberately does not do]")
        .finish()
}

fn api_endpoint(cfg: &ProjectConfig) -> String {
    let stack = cfg
        .backend
        .as_ref()
        .map(|b| stack_label(&b.language, &b.framework))
        .unwrap_or_default();
    let api_rules = cfg.backend.as_ref().map(|b| b.api_rules.as_str()).unwrap_or("");

    Doc::new()
        .h1("API Endpoint: [METHOD] /[path]")
        .para(&format!("Backend: {}", stack))
        .h2("Request")
        .bullets(["Method: `[GET|POST|PUT|DELETE]`", "Path parameters:", "Body schema:"])
        .blank()
        .h2("Response")
        .bullets(["Success status and schema:", "Error statuses:"])
        .blank()
        .when(!api_rules.is_empty(), |d| d.h2("API Conventions").para(api_rules))
        .h2("Validation")
        .checkboxes(["Input validation rules", "Authentication and authorization"])
        .blank()
        .h2("Tests")
        .checkboxes(["Happy path", "Invalid input", "Test data models and validation"])
        .finish()
}

fn component(cfg: &ProjectConfig) -> String {
    let stack = cfg
        .frontend
        .as_ref()
        .map(|f| stack_label(&f.language, &f.framework))
        .unwrap_or_default();

    Doc::new()
        .h1("Component: [ComponentName]")
        .para(&format!("Frontend: {}", stack))
        .h2("Purpose")
        .para("[What the component renders and why]")
        .h2("Props")
        .line("| Name | Type | Required | Description |")
        .line("|------|------|----------|-------------|")
        .blank()
        .h2("State and Events")
        .bullets(["Internal state:", "Emitted events:"])
        .blank()
        .h2("Accessibility")
        .checkboxes(["Keyboard navigation", "Screen reader labels"])
        .blank()
        .h2("Tests")
        .checkboxes(["Renders with required props", "Handles user interaction"])
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_util::{backend, ctx, full_config, general};
    use proser_core::domain::SpecsConfig;

    #[test]
    fn all_three_for_fullstack() {
        let files = SpecsGenerator.generate(&ctx(full_config())).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.contains(".github/specs/component.spec.md"));
    }

    #[test]
    fn component_needs_frontend() {
        let cfg = ProjectConfig::new(general())
            .with_backend(backend("go"))
            .with_specs(SpecsConfig {
                feature_template: true,
                api_endpoint: true,
                component: true,
            });
        let files = SpecsGenerator.generate(&ctx(cfg)).unwrap();
        let paths: Vec<_> = files.paths().map(|p| p.to_string()).collect();
        assert_eq!(
            paths,
            [".github/specs/feature-template.spec.md", ".github/specs/api-endpoint.spec.md"]
        );
        let api = &files.get(".github/specs/api-endpoint.spec.md").unwrap().content;
        assert!(api.contains("Backend: go (Gin)"));
    }

    #[test]
    fn absent_section_yields_nothing() {
        let files = SpecsGenerator.generate(&ctx(ProjectConfig::new(general()))).unwrap();
        assert!(files.is_empty());
    }
}
