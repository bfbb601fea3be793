//! Per-role agent definitions under `.github/agents`.

use proser_core::{
    application::{GenerateContext, Generator},
    domain::{AgentsConfig, GeneratedFiles, OutputNamespace, ProjectConfig},
    error::ProserResult,
};

use super::{AGENTS_DIR, Doc, rel, stack_label};

/// Which config section a role additionally requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Needs {
    Nothing,
    Frontend,
    Backend,
}

struct Role {
    file: &'static str,
    title: &'static str,
    description: &'static str,
    tools: &'static str,
    enabled: fn(&AgentsConfig) -> bool,
    needs: Needs,
    context: &'static [&'static str],
    approach: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        file: "architect",
        title: "Architect",
        description: "Designs system structure and reviews architectural decisions",
        tools: "['codebase', 'search', 'usages']",
        enabled: |a| a.architect,
        needs: Needs::Nothing,
        context: &["AGENTS.md", ".github/copilot-instructions.md"],
        approach: &[
            "Understand the existing structure before proposing changes",
            "Prefer incremental evolution over rewrites",
            "Document decisions and their trade-offs",
        ],
    },
    Role {
        file: "frontend-engineer",
        title: "Frontend Engineer",
        description: "Builds and maintains user interface components",
        tools: "['codebase', 'editFiles', 'search']",
        enabled: |a| a.frontend,
        needs: Needs::Frontend,
        context: &[".github/instructions/frontend.instructions.md"],
        approach: &[
            "Follow the existing component patterns",
            "Keep components accessible and tested",
        ],
    },
    Role {
        file: "backend-engineer",
        title: "Backend Engineer",
        description: "Implements services, APIs and data access",
        tools: "['codebase', 'editFiles', 'search', 'runCommands']",
        enabled: |a| a.backend,
        needs: Needs::Backend,
        context: &[".github/instructions/backend.instructions.md"],
        approach: &[
            "Validate inputs at API boundaries",
            "Handle every error path explicitly",
            "Write tests alongside the implementation",
        ],
    },
    Role {
        file: "code-reviewer",
        title: "Code Reviewer",
        description: "Reviews changes for correctness, security and style",
        tools: "['codebase', 'search', 'problems']",
        enabled: |a| a.code_reviewer,
        needs: Needs::Nothing,
        context: &[".github/copilot-instructions.md"],
        approach: &[
            "Check correctness before style",
            "Flag missing tests and unhandled errors",
            "Suggest concrete fixes",
        ],
    },
    Role {
        file: "technical-writer",
        title: "Technical Writer",
        description: "Writes and maintains project documentation",
        tools: "['codebase', 'editFiles', 'search']",
        enabled: |a| a.technical_writer,
        needs: Needs::Nothing,
        context: &["README.md", "AGENTS.md"],
        approach: &[
            "Write for a reader new to the project",
            "Keep examples runnable and current",
        ],
    },
    Role {
        file: "devops-engineer",
        title: "DevOps Engineer",
        description: "Maintains build, CI and deployment configuration",
        tools: "['codebase', 'editFiles', 'runCommands']",
        enabled: |a| a.devops,
        needs: Needs::Nothing,
        context: &[".github/workflows/"],
        approach: &[
            "Keep pipelines reproducible",
            "Never commit secrets",
        ],
    },
    Role {
        file: "tester",
        title: "Tester",
        description: "Designs and writes automated tests",
        tools: "['codebase', 'editFiles', 'runCommands', 'findTestFiles']",
        enabled: |a| a.tester,
        needs: Needs::Nothing,
        context: &[".github/instructions/testing.instructions.md"],
        approach: &[
            "Cover edge cases and failure paths",
            "Keep tests deterministic",
        ],
    },
];

/// One `<role>.agent.md` per enabled role.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentsGenerator;

impl Generator for AgentsGenerator {
    fn name(&self) -> &'static str {
        "agents"
    }

    fn namespace(&self) -> OutputNamespace {
        OutputNamespace::directory(AGENTS_DIR)
    }

    fn generate(&self, ctx: &GenerateContext) -> ProserResult<GeneratedFiles> {
        let cfg = ctx.config();
        let mut files = GeneratedFiles::new();
        let Some(agents) = &cfg.agents else {
            return Ok(files);
        };

        for role in ROLES {
            let applicable = match role.needs {
                Needs::Nothing => true,
                Needs::Frontend => cfg.has_frontend(),
                Needs::Backend => cfg.has_backend(),
            };
            if !(role.enabled)(agents) || !applicable {
                continue;
            }
            let path = rel(format!("{}/{}.agent.md", AGENTS_DIR, role.file))?;
            files.add(path, render(role, cfg))?;
        }
        Ok(files)
    }
}

fn render(role: &Role, cfg: &ProjectConfig) -> String {
    let description = format!("\"{}\"", role.description);
    let mut doc = Doc::new()
        .front_matter(&[
            ("description", description.as_str()),
            ("tools", role.tools),
            ("model", "Claude Sonnet 4"),
        ])
        .h1(role.title)
        .h2("Project Context")
        .bullet(&format!("**Project**: {}", cfg.general.project_name));

    if let Some(frontend) = &cfg.frontend {
        doc = doc.bullet(&format!(
            "**Frontend**: {}",
            stack_label(&frontend.language, &frontend.framework)
        ));
    }
    if let Some(backend) = &cfg.backend {
        doc = doc.bullet(&format!(
            "**Backend**: {}",
            stack_label(&backend.language, &backend.framework)
        ));
    }

    doc.blank()
        .h2("Context Loading")
        .line("Read before starting:")
        .bullets(role.context.iter().copied())
        .blank()
        .h2("Approach")
        .numbered(role.approach.iter().copied())
        .finish()
}
