//! Persists one generator's output through storage.

use std::path::PathBuf;
use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{GenerateContext, Generator, WritePolicy},
    },
    domain::{DomainError, GeneratedFiles, Permissions},
    error::ProserResult,
};

/// A write that failed under [`WritePolicy::BestEffort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorReport {
    pub generator: &'static str,
    /// Absolute paths written, in write order.
    pub written: Vec<PathBuf>,
    pub warnings: Vec<WriteWarning>,
}

impl GeneratorReport {
    fn new(generator: &'static str) -> Self {
        Self {
            generator,
            written: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Writer;

impl Writer {
    pub fn new() -> Self {
        Self
    }

    /// Run `generate` and check every output path against the generator's
    /// namespace. Nothing is written.
    pub fn generate_checked(
        &self,
        generator: &dyn Generator,
        ctx: &GenerateContext,
    ) -> ProserResult<GeneratedFiles> {
        let name = generator.name();
        let files = generator
            .generate(ctx)
            .map_err(|source| ApplicationError::GeneratorFailed {
                generator: name.to_string(),
                source: Box::new(source),
            })?;

        let namespace = generator.namespace();
        if let Some(stray) = files.paths().find(|p| !namespace.contains(p)) {
            return Err(DomainError::PathOutsideNamespace {
                generator: name.to_string(),
                path: stray.to_string(),
                namespace: namespace.to_string(),
            }
            .into());
        }

        Ok(files)
    }

    /// Generate, then write each file in order: parent directories first,
    /// then content.
    ///
    /// Under [`WritePolicy::Strict`] the first failed write aborts the rest.
    /// Under [`WritePolicy::BestEffort`] it is logged, recorded as a warning
    /// and the next file is attempted.
    #[instrument(skip_all, fields(generator = generator.name()))]
    pub fn run_generator(
        &self,
        generator: &dyn Generator,
        ctx: &GenerateContext,
    ) -> ProserResult<GeneratorReport> {
        let name = generator.name();
        let policy = generator.write_policy();
        let files = self.generate_checked(generator, ctx)?;
        let storage = ctx.storage();

        let mut report = GeneratorReport::new(name);
        for file in &files {
            let target = ctx.root().join(file.path.as_path());

            let result = match target.parent() {
                Some(parent) => storage.create_dir_all(parent, Permissions::directory()),
                None => Ok(()),
            }
            .and_then(|()| storage.write_file(&target, file.content.as_bytes(), file.permissions));

            match result {
                Ok(()) => {
                    debug!(path = %target.display(), bytes = file.size(), "Wrote file");
                    report.written.push(target);
                }
                Err(e) if policy == WritePolicy::BestEffort => {
                    warn!(path = %target.display(), error = %e, "Skipping file that could not be written");
                    report.warnings.push(WriteWarning {
                        path: target,
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    return Err(ApplicationError::WriteFailed {
                        generator: name.to_string(),
                        path: target,
                        source: Box::new(e),
                    }
                    .into());
                }
            }
        }

        Ok(report)
    }
}
