//! Project types and their registry.
//!
//! A project type binds a name to the ordered generators and the questions
//! relevant to one project shape. The registry is an explicit value built at
//! startup and passed to whoever needs lookups.

use std::fmt;

use tracing::warn;

use crate::{
    application::{ApplicationError, ports::Generator},
    domain::{DomainError, Question},
    error::ProserResult,
};

pub struct ProjectType {
    name: String,
    description: String,
    questions: Vec<Question>,
    generators: Vec<Box<dyn Generator>>,
}

impl ProjectType {
    pub fn builder(name: impl Into<String>) -> ProjectTypeBuilder {
        ProjectTypeBuilder {
            name: name.into(),
            description: String::new(),
            questions: Vec::new(),
            generators: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Generators in run order.
    pub fn generators(&self) -> impl Iterator<Item = &dyn Generator> {
        self.generators.iter().map(|g| g.as_ref())
    }

    pub fn generator_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }
}

impl fmt::Debug for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectType")
            .field("name", &self.name)
            .field("questions", &self.questions.len())
            .field("generators", &self.generator_names())
            .finish()
    }
}

pub struct ProjectTypeBuilder {
    name: String,
    description: String,
    questions: Vec<Question>,
    generators: Vec<Box<dyn Generator>>,
}

impl ProjectTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn questions(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        self.questions.extend(questions);
        self
    }

    pub fn generator(mut self, generator: impl Generator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Fails if the name is blank or two generators could emit the same path.
    pub fn build(self) -> Result<ProjectType, DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }

        for (i, first) in self.generators.iter().enumerate() {
            let first_ns = first.namespace();
            for second in &self.generators[i + 1..] {
                let second_ns = second.namespace();
                if first_ns.overlaps(&second_ns) {
                    return Err(DomainError::OverlappingNamespaces {
                        first: first.name().to_string(),
                        second: second.name().to_string(),
                        first_namespace: first_ns.to_string(),
                        second_namespace: second_ns.to_string(),
                    });
                }
            }
        }

        Ok(ProjectType {
            name: self.name,
            description: self.description,
            questions: self.questions,
            generators: self.generators,
        })
    }
}

/// Project types in registration order, plus the name of the fallback.
#[derive(Debug)]
pub struct ProjectTypeRegistry {
    types: Vec<ProjectType>,
    default_name: String,
}

impl ProjectTypeRegistry {
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            types: Vec::new(),
            default_name: default_name.into(),
        }
    }

    pub fn register(&mut self, project_type: ProjectType) -> Result<(), DomainError> {
        if self.find(project_type.name()).is_some() {
            return Err(DomainError::DuplicateProjectType {
                name: project_type.name().to_string(),
            });
        }
        self.types.push(project_type);
        Ok(())
    }

    pub fn with(mut self, project_type: ProjectType) -> Result<Self, DomainError> {
        self.register(project_type)?;
        Ok(self)
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> ProserResult<&ProjectType> {
        self.find(name).ok_or_else(|| {
            ApplicationError::ProjectTypeNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Lookup that substitutes the default type for an unknown name.
    pub fn get_or_default(&self, name: &str) -> ProserResult<&ProjectType> {
        match self.find(name) {
            Some(t) => Ok(t),
            None => {
                warn!(requested = name, fallback = %self.default_name, "Unknown project type, using default");
                self.default_type()
            }
        }
    }

    pub fn default_type(&self) -> ProserResult<&ProjectType> {
        self.get(&self.default_name)
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn find(&self, name: &str) -> Option<&ProjectType> {
        let name = name.trim();
        self.types.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::StubGenerator;
    use crate::domain::OutputNamespace;
    use crate::error::ProserError;

    fn simple(name: &str) -> ProjectType {
        ProjectType::builder(name)
            .generator(StubGenerator::new("root", OutputNamespace::file("AGENTS.md")))
            .build()
            .unwrap()
    }

    #[test]
    fn builder_rejects_overlapping_namespaces() {
        let err = ProjectType::builder("bad")
            .generator(StubGenerator::new("github", OutputNamespace::directory(".github")))
            .generator(StubGenerator::new(
                "copilot",
                OutputNamespace::file(".github/copilot-instructions.md"),
            ))
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::OverlappingNamespaces { ref first, ref second, .. }
            if first == "github" && second == "copilot"));
    }

    #[test]
    fn builder_keeps_generator_order() {
        let pt = ProjectType::builder("ok")
            .description("demo")
            .questions([Question::new("project_name", "Name", "my-project")])
            .generator(StubGenerator::new("b", OutputNamespace::file("b.md")))
            .generator(StubGenerator::new("a", OutputNamespace::file("a.md")))
            .build()
            .unwrap();
        assert_eq!(pt.generator_names(), vec!["b", "a"]);
        assert_eq!(pt.questions().len(), 1);
    }

    #[test]
    fn blank_name_rejected() {
        assert!(ProjectType::builder("  ").build().is_err());
    }

    #[test]
    fn registry_lookup_and_fallback() {
        let registry = ProjectTypeRegistry::new("fullstack")
            .with(simple("fullstack"))
            .unwrap()
            .with(simple("backend"))
            .unwrap();

        assert_eq!(registry.names(), vec!["fullstack", "backend"]);
        assert_eq!(registry.get("Backend").unwrap().name(), "backend");

        let err = registry.get("mobile").unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(
            err,
            ProserError::Application(ApplicationError::ProjectTypeNotFound { .. })
        ));

        assert_eq!(registry.get_or_default("mobile").unwrap().name(), "fullstack");
    }

    #[test]
    fn registry_rejects_duplicates() {
        let mut registry = ProjectTypeRegistry::new("x");
        registry.register(simple("x")).unwrap();
        assert_eq!(
            registry.register(simple("X")).unwrap_err(),
            DomainError::DuplicateProjectType { name: "X".into() }
        );
        assert_eq!(registry.len(), 1);
    }
}
