//! Built-in project types: `fullstack` (default), `frontend` and `backend`.
//!
//! Each type is a fixed generator list plus the question groups that shape
//! its config. The registry is built once at startup from the scan settings
//! and passed to whatever needs lookups.

use proser_core::{
    application::{DirectoryScanner, ProjectType, ProjectTypeRegistry},
    domain::{DomainError, Question, SkipList},
};

use crate::generators::{
    AgentMdGenerator, AgentsGenerator, AgentsMdGenerator, BackendInstructionsGenerator,
    CopilotInstructionsGenerator, FrontendInstructionsGenerator, PromptsGenerator,
    SpecsGenerator, TestingInstructionsGenerator,
};

pub const FULLSTACK: &str = "fullstack";
pub const FRONTEND: &str = "frontend";
pub const BACKEND: &str = "backend";

/// Name of the type used when none (or an unknown one) is requested.
pub const DEFAULT_PROJECT_TYPE: &str = FULLSTACK;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Fullstack,
    Frontend,
    Backend,
}

impl Shape {
    fn has_frontend(self) -> bool {
        matches!(self, Self::Fullstack | Self::Frontend)
    }

    fn has_backend(self) -> bool {
        matches!(self, Self::Fullstack | Self::Backend)
    }
}

/// Registry with the three built-in types, in `fullstack`, `frontend`,
/// `backend` order.
pub fn builtin_registry(
    max_depth: usize,
    skip_list: SkipList,
) -> Result<ProjectTypeRegistry, DomainError> {
    let scanner = DirectoryScanner::new(max_depth, skip_list);

    ProjectTypeRegistry::new(DEFAULT_PROJECT_TYPE)
        .with(build(
            FULLSTACK,
            "Full-stack application with frontend and backend",
            Shape::Fullstack,
            &scanner,
        )?)?
        .with(build(FRONTEND, "Frontend application only", Shape::Frontend, &scanner)?)?
        .with(build(BACKEND, "Backend/API service only", Shape::Backend, &scanner)?)
}

fn build(
    name: &str,
    description: &str,
    shape: Shape,
    scanner: &DirectoryScanner,
) -> Result<ProjectType, DomainError> {
    let mut builder = ProjectType::builder(name)
        .description(description)
        .questions(questions(shape))
        .generator(CopilotInstructionsGenerator);

    if shape.has_frontend() {
        builder = builder.generator(FrontendInstructionsGenerator);
    }
    if shape.has_backend() {
        builder = builder.generator(BackendInstructionsGenerator);
    }

    builder
        .generator(TestingInstructionsGenerator)
        .generator(AgentsGenerator)
        .generator(PromptsGenerator)
        .generator(SpecsGenerator)
        .generator(AgentsMdGenerator)
        .generator(AgentMdGenerator::new(scanner.clone()))
        .build()
}

fn questions(shape: Shape) -> Vec<Question> {
    let mut qs = general_questions();
    if shape.has_frontend() {
        qs.extend(frontend_questions());
    }
    if shape.has_backend() {
        qs.extend(backend_questions());
    }
    qs.extend(testing_questions());
    qs.extend(feature_questions(shape));
    qs
}

fn general_questions() -> Vec<Question> {
    vec![
        Question::new("project_name", "Project name", "my-project"),
        Question::new("description", "Project description", "A software project"),
        Question::new(
            "code_style",
            "General code style guidelines (e.g., follow PEP8, use gofmt, ESLint rules)",
            "Follow standard formatting",
        ),
        Question::new(
            "security",
            "Security requirements (e.g., authentication methods, data encryption, OWASP compliance)",
            "Follow OWASP top 10",
        ),
        Question::new("custom_rules", "Additional custom rules or guidelines", "None"),
    ]
}

fn frontend_questions() -> Vec<Question> {
    vec![
        Question::new(
            "frontend_language",
            "Frontend language (e.g., JavaScript, TypeScript, or 'skip' if no frontend)",
            "JavaScript",
        ),
        Question::new(
            "frontend_framework",
            "Frontend framework (e.g., React, Vue, Angular, Vanilla)",
            "React",
        ),
        Question::new(
            "frontend_build_tool",
            "Frontend build tool (e.g., Webpack, Vite, Parcel)",
            "Vite",
        ),
    ]
}

fn backend_questions() -> Vec<Question> {
    vec![
        Question::new(
            "backend_language",
            "Backend language (e.g., Go, Python, Java, Node.js, or 'skip' if no backend)",
            "Go",
        ),
        Question::new(
            "backend_framework",
            "Backend framework (e.g., Express, Flask, Spring, Gin, FastAPI)",
            "None",
        ),
        Question::new(
            "backend_database",
            "Primary database (e.g., PostgreSQL, MongoDB, MySQL, SQLite)",
            "PostgreSQL",
        ),
        Question::new(
            "api_rules",
            "API design rules (e.g., RESTful, GraphQL standards, versioning strategy)",
            "RESTful API design",
        ),
    ]
}

fn testing_questions() -> Vec<Question> {
    vec![
        Question::new(
            "testing_framework",
            "Primary testing framework (e.g., Jest, pytest, JUnit, Go testing)",
            "Jest",
        ),
        Question::new(
            "testing_strategy",
            "Testing strategy focus (e.g., Unit tests, Integration tests, E2E, TDD)",
            "Unit and Integration tests",
        ),
    ]
}

/// Agent, prompt and spec toggles. Frontend/backend-only toggles are left
/// out of shapes that cannot use them.
fn feature_questions(shape: Shape) -> Vec<Question> {
    let yes_no = |key: &str, prompt: &str, default: bool| {
        Question::new(key, prompt, if default { "yes" } else { "no" })
    };

    let mut qs = vec![
        yes_no("enable_agents", "Generate agent definitions?", true),
        yes_no("agent_architect", "Include the architect agent?", true),
    ];
    if shape.has_frontend() {
        qs.push(yes_no("agent_frontend", "Include the frontend engineer agent?", true));
    }
    if shape.has_backend() {
        qs.push(yes_no("agent_backend", "Include the backend engineer agent?", true));
    }
    qs.extend([
        yes_no("agent_code_reviewer", "Include the code reviewer agent?", true),
        yes_no("agent_technical_writer", "Include the technical writer agent?", true),
        yes_no("agent_devops", "Include the DevOps engineer agent?", false),
        yes_no("agent_tester", "Include the tester agent?", true),
        yes_no("enable_prompts", "Generate prompt templates?", true),
        yes_no("prompt_code_review", "Include the code review prompt?", true),
        yes_no("prompt_feature_spec", "Include the feature spec prompt?", true),
        yes_no("prompt_refactor", "Include the refactor prompt?", true),
        yes_no("prompt_bug_fix", "Include the bug fix prompt?", true),
        yes_no("prompt_pr_description", "Include the PR description prompt?", true),
        yes_no("enable_specs", "Generate specification templates?", true),
        yes_no("spec_feature_template", "Include the feature spec template?", true),
    ]);
    if shape.has_backend() {
        qs.push(yes_no("spec_api_endpoint", "Include the API endpoint spec template?", true));
    }
    if shape.has_frontend() {
        qs.push(yes_no("spec_component", "Include the component spec template?", true));
    }
    qs
}
