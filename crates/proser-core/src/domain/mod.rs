//! Core domain layer for Proser.
//!
//! Pure data and rules: the project configuration, validated relative paths,
//! generated file sets, output ownership and the skip-list. No I/O happens
//! here; storage and generation are reached through the application ports.

pub mod common;
pub mod config;
pub mod error;
pub mod generated;
pub mod namespace;
pub mod question;
pub mod skip_list;

pub use common::{Permissions, RelativePath};
pub use config::{
    AgentsConfig, BackendConfig, FrontendConfig, GeneralConfig, ProjectConfig, PromptsConfig,
    SpecsConfig, TestingConfig, is_affirmative,
};
pub use error::{DomainError, ErrorCategory};
pub use generated::{GeneratedFile, GeneratedFiles};
pub use namespace::OutputNamespace;
pub use question::{Answers, Question};
pub use skip_list::{DEFAULT_SKIP_DIRS, SkipList};
