//! Scaffold Service - main application orchestrator.
//!
//! Runs every generator of a project type, in order, through the writer:
//! 1. Validate the target root
//! 2. Build one generate context
//! 3. Generate and persist each generator's output
//!
//! There is no whole-run transaction. A failing generator stops the run but
//! output already written by earlier generators stays in place.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, ProjectType,
        ports::{GenerateContext, Storage},
        services::writer::{GeneratorReport, WriteWarning, Writer},
    },
    domain::{GeneratedFiles, ProjectConfig},
    error::ProserResult,
};

/// Per-generator outcome of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_type: String,
    pub root: PathBuf,
    pub generators: Vec<GeneratorReport>,
}

impl ScaffoldReport {
    pub fn files_written(&self) -> usize {
        self.generators.iter().map(|g| g.written.len()).sum()
    }

    pub fn warnings(&self) -> impl Iterator<Item = (&'static str, &WriteWarning)> {
        self.generators
            .iter()
            .flat_map(|g| g.warnings.iter().map(move |w| (g.generator, w)))
    }

    pub fn has_warnings(&self) -> bool {
        self.generators.iter().any(|g| !g.warnings.is_empty())
    }
}

/// One generator's output in a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOutput {
    pub generator: &'static str,
    pub files: GeneratedFiles,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    storage: Arc<dyn Storage>,
    writer: Writer,
}

impl ScaffoldService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            writer: Writer::new(),
        }
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Generate and write every file of `project_type` under `root`.
    #[instrument(
        skip_all,
        fields(project_type = %project_type.name(), root = %root.display())
    )]
    pub fn run(
        &self,
        project_type: &ProjectType,
        config: ProjectConfig,
        root: &Path,
    ) -> ProserResult<ScaffoldReport> {
        self.validate_root(root)?;
        info!(
            project = %config.general.project_name,
            generators = project_type.generator_names().len(),
            "Scaffolding project"
        );

        let ctx = GenerateContext::new(config, root, Arc::clone(&self.storage));
        let mut report = ScaffoldReport {
            project_type: project_type.name().to_string(),
            root: root.to_path_buf(),
            generators: Vec::new(),
        };

        for generator in project_type.generators() {
            let outcome = self.writer.run_generator(generator, &ctx)?;
            info!(
                generator = outcome.generator,
                written = outcome.written.len(),
                warnings = outcome.warnings.len(),
                "Generator finished"
            );
            report.generators.push(outcome);
        }

        info!(files = report.files_written(), "Scaffold completed");
        Ok(report)
    }

    /// Compute every generator's output without writing anything.
    #[instrument(skip_all, fields(project_type = %project_type.name()))]
    pub fn plan(
        &self,
        project_type: &ProjectType,
        config: ProjectConfig,
        root: &Path,
    ) -> ProserResult<Vec<PlannedOutput>> {
        self.validate_root(root)?;
        let ctx = GenerateContext::new(config, root, Arc::clone(&self.storage));

        project_type
            .generators()
            .map(|generator| {
                Ok(PlannedOutput {
                    generator: generator.name(),
                    files: self.writer.generate_checked(generator, &ctx)?,
                })
            })
            .collect()
    }

    /// The root must exist and be a directory.
    pub fn validate_root(&self, root: &Path) -> ProserResult<()> {
        match self.storage.metadata(root) {
            Ok(info) if info.is_dir() => Ok(()),
            Ok(_) => Err(ApplicationError::InvalidTargetRoot {
                path: root.to_path_buf(),
                reason: "not a directory".into(),
            }
            .into()),
            Err(e) if e.is_not_found() => Err(ApplicationError::InvalidTargetRoot {
                path: root.to_path_buf(),
                reason: "does not exist".into(),
            }
            .into()),
            Err(e) => Err(e),
        }
    }
}
