//! Proser Core - generation-and-placement pipeline.
//!
//! Turns a [`domain::ProjectConfig`] into files under a target directory,
//! following a ports-and-adapters layout.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            proser-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (ScaffoldService, Writer, Scanner)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │          (Storage, Generator)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     proser-adapters (Infrastructure)    │
//! │ (LocalStorage, MemoryStorage, builtins) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::{path::Path, sync::Arc};
//! use proser_core::prelude::*;
//!
//! fn scaffold(storage: Arc<dyn Storage>, registry: &ProjectTypeRegistry) -> ProserResult<()> {
//!     let project_type = registry.get_or_default("backend")?;
//!     let config = ProjectConfig::from_answers(&Question::defaults(project_type.questions()));
//!     let report = ScaffoldService::new(storage).run(project_type, config, Path::new("."))?;
//!     println!("{} files written", report.files_written());
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        DirectoryScanner, GenerateContext, Generator, ProjectType, ProjectTypeRegistry,
        ScaffoldReport, ScaffoldService, Storage, WritePolicy, Writer,
    };
    pub use crate::domain::{
        Answers, GeneratedFiles, OutputNamespace, ProjectConfig, Question, RelativePath,
        SkipList,
    };
    pub use crate::error::{ProserError, ProserResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
