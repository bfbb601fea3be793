//! Reusable prompt files under `.github/prompts`.

use proser_core::{
    application::{GenerateContext, Generator},
    domain::{GeneralConfig, GeneratedFiles, OutputNamespace, PromptsConfig},
    error::ProserResult,
};

use super::{Doc, PROMPTS_DIR, rel};

type Render = fn(&GeneralConfig) -> String;

const PROMPTS: &[(&str, fn(&PromptsConfig) -> bool, Render)] = &[
    ("code-review", |p| p.code_review, code_review),
    ("feature-spec", |p| p.feature_spec, feature_spec),
    ("refactor", |p| p.refactor, refactor),
    ("bug-fix", |p| p.bug_fix, bug_fix),
    ("pr-description", |p| p.pr_description, pr_description),
];

/// One `<name>.prompt.md` per enabled prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptsGenerator;

impl Generator for PromptsGenerator {
    fn name(&self) -> &'static str {
        "prompts"
    }

    fn namespace(&self) -> OutputNamespace {
        OutputNamespace::directory(PROMPTS_DIR)
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let cfg = ctx.config();
        let mut files = GeneratedFiles::new();
        let Some(prompts) = &cfg.prompts else {
            return Ok(files);
        };

        for (name, enabled, render) in PROMPTS {
            if enabled(prompts) {
                let path = rel(format!("{}/{}.prompt.md", PROMPTS_DIR, name))?;
                files.add(path, render(&cfg.general))?;
            }
        }
        Ok(files)
    }
}

fn header(description: &str, tools: &str) -> Doc {
    let description = format!("'{}'", description);
    Doc::new().front_matter(&[
        ("mode", "agent"),
        ("tools", tools),
        ("description", description.as_str()),
    ])
}

fn code_review(general: &GeneralConfig) -> String {
    header(
        "Structured code review workflow with validation gates",
        "['changes', 'problems', 'search']",
    )
    .h1("Code Review Workflow")
    .h2("Context Loading")
    .numbered(["Read the changed files", "Check reported problems and warnings"])
    .when(!general.code_style.is_empty(), |d| {
        d.line(&format!("- Verify adherence to: {}", general.code_style))
    })
    .when(!general.security.is_empty(), |d| {
        d.line(&format!("- Check security requirements: {}", general.security))
    })
    .blank()
    .h2("Review Checklist")
    .h3("Code Quality")
    .checkboxes([
        "Code follows project style guidelines",
        "Functions have clear, single responsibilities",
        "Names are descriptive",
        "No unnecessary complexity",
    ])
    .blank()
    .h3("Security")
    .checkboxes([
        "No hard-coded credentials or secrets",
        "Input is validated",
    ])
    .blank()
    .h3("Testing")
    .checkboxes(["New behaviour is covered by tests", "Edge cases are tested"])
    .blank()
    .h2("Human Validation Gate")
    .para("Summarise findings by severity and wait for confirmation before applying fixes.")
    .finish()
}

fn feature_spec(general: &GeneralConfig) -> String {
    header(
        "Turn a feature request into an implementation-ready specification",
        "['codebase', 'search', 'editFiles']",
    )
    .h1("Feature Specification Workflow")
    .h2("Steps")
    .numbered([
        "Clarify the problem and the users affected",
        "List acceptance criteria",
        "Identify affected modules and interfaces",
        "Write the spec from `.github/specs/feature-template.spec.md`",
    ])
    .blank()
    .when(!general.project_name.is_empty(), |d| {
        d.para(&format!("Keep the spec consistent with the conventions of {}.", general.project_name))
    })
    .h2("Human Validation Gate")
    .para("Present the specification for review before any implementation starts.")
    .finish()
}

fn refactor(general: &GeneralConfig) -> String {
    header(
        "Behaviour-preserving refactoring with test safety net",
        "['codebase', 'editFiles', 'runCommands', 'usages']",
    )
    .h1("Refactoring Workflow")
    .h2("Steps")
    .numbered([
        "Confirm existing tests pass",
        "Add tests for uncovered behaviour",
        "Refactor in small steps",
        "Run the tests after each step",
    ])
    .blank()
    .when(!general.code_style.is_empty(), |d| {
        d.h2("Target Style").para(&general.code_style)
    })
    .h2("Rules")
    .bullets([
        "Do not change observable behaviour",
        "Do not mix refactoring with feature work",
    ])
    .finish()
}

fn bug_fix(_general: &GeneralConfig) -> String {
    header(
        "Reproduce, fix and verify a defect",
        "['codebase', 'editFiles', 'runCommands', 'problems']",
    )
    .h1("Bug Fix Workflow")
    .h2("Steps")
    .numbered([
        "Reproduce the bug with a failing test",
        "Locate the root cause",
        "Apply the smallest fix that makes the test pass",
        "Run the full test suite",
    ])
    .blank()
    .h2("Structured Output")
    .checkboxes([
        "Root cause explained",
        "Regression test added",
        "No unrelated changes",
    ])
    .finish()
}

fn pr_description(_general: &GeneralConfig) -> String {
    header(
        "Draft a pull request description from the current changes",
        "['changes']",
    )
    .h1("Pull Request Description")
    .h2("Template")
    .line("```markdown")
    .line("## Summary")
    .line("[What changed and why]")
    .blank()
    .line("## Testing")
    .line("[How the change was verified]")
    .line("```")
    .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_util::{ctx, full_config, general};
    use proser_core::domain::ProjectConfig;

    #[test]
    fn absent_section_yields_nothing() {
        let files = PromptsGenerator.generate(&ctx(ProjectConfig::new(general()))).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn every_prompt_when_all_enabled() {
        let files = PromptsGenerator.generate(&ctx(full_config())).unwrap();
        let paths: Vec<_> = files.paths().map(|p| p.to_string()).collect();
        assert_eq!(
            paths,
            [
                ".github/prompts/code-review.prompt.md",
                ".github/prompts/feature-spec.prompt.md",
                ".github/prompts/refactor.prompt.md",
                ".github/prompts/bug-fix.prompt.md",
                ".github/prompts/pr-description.prompt.md",
            ]
        );
        let review = &files.get(".github/prompts/code-review.prompt.md").unwrap().content;
        assert!(review.starts_with("---\nmode: agent\n"));
        assert!(review.contains("Validate all input"));
    }

    #[test]
    fn only_enabled_prompts() {
        let cfg = ProjectConfig::new(general()).with_prompts(PromptsConfig {
            bug_fix: true,
            ..PromptsConfig::default()
        });
        let files = PromptsGenerator.generate(&ctx(cfg)).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files.contains(".github/prompts/bug-fix.prompt.md"));
    }
}
