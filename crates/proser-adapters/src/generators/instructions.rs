//! Domain instruction files under `.github/instructions`.

use proser_core::{
    application::{GenerateContext, Generator},
    domain::{BackendConfig, FrontendConfig, GeneralConfig, GeneratedFiles, OutputNamespace},
    error::ProserResult,
};

use super::{Doc, INSTRUCTIONS_DIR, languages, meaningful_framework, rel};

const FRONTEND_FILE: &str = "frontend.instructions.md";
const BACKEND_FILE: &str = "backend.instructions.md";
const TESTING_FILE: &str = "testing.instructions.md";

const FRONTEND_GLOB: &str = "**/*.{jsx,tsx,css,js,ts,html,vue,scss,sass,less}";
const BACKEND_FALLBACK_GLOB: &str = "**/*.{go,py,java,rs,js,ts}";
const TEST_FALLBACK_GLOB: &str = "**/test/**";

fn path_of(file: &str) -> String {
    format!("{}/{}", INSTRUCTIONS_DIR, file)
}

fn apply_to(glob: &str) -> String {
    format!("\"{}\"", glob)
}

fn single(file: &str, content: String) -> ProserResult<GeneratedFiles> {
    Ok(GeneratedFiles::new().with_file(rel(path_of(file))?, content)?)
}

fn style_sections(doc: Doc, general: &GeneralConfig) -> Doc {
    doc.when(!general.code_style.is_empty(), |d| {
        d.h2("Project Code Style").para(&general.code_style)
    })
}

// ---------------------------------------------------------------------------
// Frontend
// ---------------------------------------------------------------------------

/// Frontend development rules. Empty when the config has no frontend.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontendInstructionsGenerator;

impl Generator for FrontendInstructionsGenerator {
    fn name(&self) -> &'static str {
        "frontend-instructions"
    }

    fn namespace(&self) -> OutputNamespace {
        OutputNamespace::file(&path_of(FRONTEND_FILE))
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let cfg = ctx.config();
        let Some(frontend) = &cfg.frontend else {
            return Ok(GeneratedFiles::new());
        };
        single(FRONTEND_FILE, frontend_doc(&cfg.general, frontend))
    }
}

fn frontend_doc(general: &GeneralConfig, frontend: &FrontendConfig) -> String {
    let framework = meaningful_framework(&frontend.framework);
    let title = match framework {
        Some(fw) => format!("Frontend Development Guidelines ({})", fw),
        None => "Frontend Development Guidelines".to_string(),
    };

    let doc = Doc::new()
        .front_matter(&[("applyTo", apply_to(FRONTEND_GLOB).as_str())])
        .h1(&title)
        .h2("Context Loading")
        .line("Before making changes, review:")
        .bullets([
            "[Project overview](../copilot-instructions.md)",
            "Existing components in the same feature area",
        ])
        .blank()
        .h2("Technology Stack")
        .bullet(&format!("**Language**: {}", frontend.language))
        .when(framework.is_some(), |d| {
            d.bullet(&format!("**Framework**: {}", framework.unwrap_or_default()))
        })
        .when(!frontend.build_tool.is_empty(), |d| {
            d.bullet(&format!("**Build Tool**: {}", frontend.build_tool))
        })
        .blank()
        .h2("Deterministic Requirements")
        .bullets([
            "Components must be pure and predictable",
            "Keep state changes explicit and traceable",
            "Never mutate props or shared state directly",
        ]);

    let doc = match languages::lookup(&frontend.language) {
        Some(profile) => doc.bullets(profile.guidelines.iter().copied()),
        None => doc,
    }
    .blank();

    let guidelines: &[&str] = match framework.map(str::to_ascii_lowercase).as_deref() {
        Some("react") => &[
            "Use functional components with hooks",
            "Keep components small and focused",
            "Lift state only as far as needed",
        ],
        Some("vue") => &[
            "Use the Composition API for new components",
            "Keep templates declarative",
            "Use computed properties for derived state",
        ],
        Some("angular") => &[
            "Use standalone components where possible",
            "Keep services stateless where possible",
            "Use OnPush change detection",
        ],
        _ => &[
            "Separate presentation from data fetching",
            "Keep accessibility in mind for every component",
        ],
    };

    style_sections(doc.h2("Framework Guidelines").bullets(guidelines.iter().copied()).blank(), general)
        .h2("Structured Output")
        .line("Every change should include:")
        .checkboxes([
            "Accessible markup",
            "Component tests for new behaviour",
            "No console errors or warnings",
        ])
        .finish()
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// Backend development rules. Empty when the config has no backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackendInstructionsGenerator;

impl Generator for BackendInstructionsGenerator {
    fn name(&self) -> &'static str {
        "backend-instructions"
    }

    fn namespace(&self) -> OutputNamespace {
        OutputNamespace::file(&path_of(BACKEND_FILE))
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let cfg = ctx.config();
        let Some(backend) = &cfg.backend else {
            return Ok(GeneratedFiles::new());
        };
        single(BACKEND_FILE, backend_doc(&cfg.general, backend))
    }
}

fn backend_doc(general: &GeneralConfig, backend: &BackendConfig) -> String {
    let profile = languages::lookup(&backend.language);
    let glob = profile.map_or(BACKEND_FALLBACK_GLOB, |p| p.source_glob);
    let framework = meaningful_framework(&backend.framework);

    let mut doc = Doc::new()
        .front_matter(&[("applyTo", apply_to(glob).as_str())])
        .h1("Backend Development Guidelines")
        .h2("Technology Stack")
        .bullet(&format!("**Language**: {}", backend.language))
        .when(framework.is_some(), |d| {
            d.bullet(&format!("**Framework**: {}", framework.unwrap_or_default()))
        })
        .when(!backend.database.is_empty(), |d| {
            d.bullet(&format!("**Database**: {}", backend.database))
        })
        .blank()
        .h2("Context Loading")
        .line("Before making changes, review:")
        .bullet("[Project overview](../copilot-instructions.md)");

    if let Some(profile) = profile {
        for file in profile.context_files {
            doc = doc.bullet(&format!("`{}` for dependencies and module layout", file));
        }
        doc = doc
            .blank()
            .h2(&format!("{} Guidelines", profile.display))
            .bullets(profile.guidelines.iter().copied());
    }

    doc = doc
        .blank()
        .h2("Deterministic Requirements")
        .bullets([
            "Functions must be pure where possible",
            "Make side effects explicit at module boundaries",
            "Return errors instead of panicking",
        ])
        .blank();

    doc = style_sections(doc, general)
        .when(!backend.api_rules.is_empty(), |d| {
            d.h2("API Development").para(&backend.api_rules)
        })
        .when(!general.security.is_empty(), |d| {
            d.h2("Security").para(&general.security)
        })
        .h2("Structured Output")
        .line("Every change should include:");

    let doc = match profile {
        Some(p) => doc.checkboxes(p.checklist.iter().copied()),
        None => doc.checkboxes(["Error handling for every failure path", "Unit tests"]),
    };
    doc.finish()
}

// ---------------------------------------------------------------------------
// Testing
// ---------------------------------------------------------------------------

/// Testing rules; always produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestingInstructionsGenerator;

impl Generator for TestingInstructionsGenerator {
    fn name(&self) -> &'static str {
        "testing-instructions"
    }

    fn namespace(&self) -> OutputNamespace {
        OutputNamespace::file(&path_of(TESTING_FILE))
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let cfg = ctx.config();
        let profile = cfg
            .backend
            .as_ref()
            .and_then(|b| languages::lookup(&b.language));
        let glob = profile.map_or(TEST_FALLBACK_GLOB, |p| p.test_glob);
        let testing = &cfg.testing;

        let framework_notes: &[&str] = match testing.framework.to_ascii_lowercase().as_str() {
            "jest" => &[
                "Use `describe` blocks to group related tests",
                "Mock modules with `jest.mock`",
            ],
            "pytest" => &["Use fixtures for shared setup", "Parametrize similar cases"],
            "junit" => &["One test class per production class", "Use @BeforeEach for setup"],
            "go testing" | "go test" => &["Use table-driven tests", "Use t.Helper() in helpers"],
            _ => &[],
        };

        let mut doc = Doc::new()
            .front_matter(&[("applyTo", apply_to(glob).as_str())])
            .h1("Testing Guidelines")
            .when(!testing.framework.is_empty(), |d| {
                d.h2("Framework")
                    .bullet(&format!("**Framework**: {}", testing.framework))
                    .bullets(framework_notes.iter().copied())
                    .blank()
            })
            .when(!testing.strategy.is_empty(), |d| {
                d.h2("Strategy").para(&testing.strategy)
            })
            .h2("Principles")
            .bullets([
                "Tests are deterministic and independent",
                "Name tests after the behaviour they check",
                "Cover edge cases and failure paths",
            ])
            .blank();

        doc = style_sections(doc, &cfg.general)
            .h2("Structured Output")
            .line("Every test change should include:")
            .checkbox("Clear arrange, act and assert sections");

        if let Some(p) = profile {
            doc = doc.checkboxes(p.test_checklist.iter().copied());
        }

        single(TESTING_FILE, doc.finish())
    }
}
