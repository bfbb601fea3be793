//! The project configuration snapshot every generator reads.
//!
//! Optional sections are `Option<...>`: a section is either fully present or
//! absent, so "has a frontend" is answered by the type, not by checking for
//! empty strings.

use serde::{Deserialize, Serialize};

use crate::domain::question::Answers;

/// General project facts. Always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub project_name: String,
    pub description: String,
    pub code_style: String,
    pub security: String,
    pub custom_rules: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    pub language: String,
    pub framework: String,
    pub build_tool: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub language: String,
    pub framework: String,
    pub database: String,
    pub api_rules: String,
}

/// Testing facts. Always present, fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestingConfig {
    pub framework: String,
    pub strategy: String,
}

/// Agent roles to generate definitions for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentsConfig {
    pub architect: bool,
    pub frontend: bool,
    pub backend: bool,
    pub code_reviewer: bool,
    pub technical_writer: bool,
    pub devops: bool,
    pub tester: bool,
}

/// Prompt templates to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptsConfig {
    pub code_review: bool,
    pub feature_spec: bool,
    pub refactor: bool,
    pub bug_fix: bool,
    pub pr_description: bool,
}

/// Specification templates to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecsConfig {
    pub feature_template: bool,
    pub api_endpoint: bool,
    pub component: bool,
}

/// Immutable snapshot of user-supplied project facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub general: GeneralConfig,
    pub frontend: Option<FrontendConfig>,
    pub backend: Option<BackendConfig>,
    pub testing: TestingConfig,
    pub agents: Option<AgentsConfig>,
    pub prompts: Option<PromptsConfig>,
    pub specs: Option<SpecsConfig>,
}

impl ProjectConfig {
    /// Start from general facts only; every optional section absent.
    pub fn new(general: GeneralConfig) -> Self {
        Self {
            general,
            ..Self::default()
        }
    }

    pub fn with_frontend(mut self, frontend: FrontendConfig) -> Self {
        self.frontend = Some(frontend);
        self
    }

    pub fn with_backend(mut self, backend: BackendConfig) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_testing(mut self, testing: TestingConfig) -> Self {
        self.testing = testing;
        self
    }

    pub fn with_agents(mut self, agents: AgentsConfig) -> Self {
        self.agents = Some(agents);
        self
    }

    pub fn with_prompts(mut self, prompts: PromptsConfig) -> Self {
        self.prompts = Some(prompts);
        self
    }

    pub fn with_specs(mut self, specs: SpecsConfig) -> Self {
        self.specs = Some(specs);
        self
    }

    pub fn has_frontend(&self) -> bool {
        self.frontend.is_some()
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Build a config from collected answers keyed by question key.
    ///
    /// Frontend/backend are present when their language answer is non-empty
    /// and not `skip`. Feature sections are present when their `enable_*`
    /// answer is affirmative.
    pub fn from_answers(answers: &Answers) -> Self {
        let get = |key: &str| answers.get(key).cloned().unwrap_or_default();
        let on = |key: &str| answers.get(key).is_some_and(|v| is_affirmative(v));

        let mut config = Self::new(GeneralConfig {
            project_name: get("project_name"),
            description: get("description"),
            code_style: get("code_style"),
            security: get("security"),
            custom_rules: get("custom_rules"),
        })
        .with_testing(TestingConfig {
            framework: get("testing_framework"),
            strategy: get("testing_strategy"),
        });

        let frontend_language = get("frontend_language");
        if is_provided(&frontend_language) {
            config = config.with_frontend(FrontendConfig {
                language: frontend_language,
                framework: get("frontend_framework"),
                build_tool: get("frontend_build_tool"),
            });
        }

        let backend_language = get("backend_language");
        if is_provided(&backend_language) {
            config = config.with_backend(BackendConfig {
                language: backend_language,
                framework: get("backend_framework"),
                database: get("backend_database"),
                api_rules: get("api_rules"),
            });
        }

        if on("enable_agents") {
            config = config.with_agents(AgentsConfig {
                architect: on("agent_architect"),
                frontend: on("agent_frontend"),
                backend: on("agent_backend"),
                code_reviewer: on("agent_code_reviewer"),
                technical_writer: on("agent_technical_writer"),
                devops: on("agent_devops"),
                tester: on("agent_tester"),
            });
        }

        if on("enable_prompts") {
            config = config.with_prompts(PromptsConfig {
                code_review: on("prompt_code_review"),
                feature_spec: on("prompt_feature_spec"),
                refactor: on("prompt_refactor"),
                bug_fix: on("prompt_bug_fix"),
                pr_description: on("prompt_pr_description"),
            });
        }

        if on("enable_specs") {
            config = config.with_specs(SpecsConfig {
                feature_template: on("spec_feature_template"),
                api_endpoint: on("spec_api_endpoint"),
                component: on("spec_component"),
            });
        }

        config
    }
}

/// `yes`, `y`, `true` and `1`, case-insensitive, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

fn is_provided(answer: &str) -> bool {
    let answer = answer.trim();
    !answer.is_empty() && !answer.eq_ignore_ascii_case("skip")
}
