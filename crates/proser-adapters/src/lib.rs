//! Infrastructure adapters for Proser.
//!
//! This crate implements the ports defined in `proser_core::application::ports`:
//! storage backends and every concrete generator. It also wires the built-in
//! project types and reads answers files.

pub mod answers;
pub mod generators;
pub mod project_types;
pub mod storage;

pub use answers::load_answers;
pub use project_types::{DEFAULT_PROJECT_TYPE, builtin_registry};
pub use storage::{LocalStorage, MemoryStorage};
