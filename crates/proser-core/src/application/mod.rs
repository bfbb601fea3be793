//! Application layer for Proser.
//!
//! This layer contains:
//! - **Ports**: `Storage` and `Generator`, implemented in `proser-adapters`
//! - **Services**: directory scanner, writer and the scaffold pipeline
//! - **Project types**: named generator bundles and their registry
//! - **Errors**: orchestration and I/O failures
//!
//! Business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod project_type;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApplicationError, StorageErrorKind};
pub use ports::{
    EntryInfo, EntryKind, GenerateContext, Generator, Storage, WalkControl, WalkVisitor,
    WritePolicy,
};
pub use project_type::{ProjectType, ProjectTypeBuilder, ProjectTypeRegistry};
pub use services::{
    DEFAULT_MAX_DEPTH, DirectoryScanner, GeneratorReport, PlannedOutput, ScaffoldReport,
    ScaffoldService, WriteWarning, Writer,
};
