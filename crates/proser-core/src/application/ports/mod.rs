//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented outside it
//!   - `Storage`: hierarchical file/directory operations
//!   - `Generator`: config to generated file set
//!
//! - **Driving (Input) Ports**: the services themselves, called by the CLI

pub mod output;

pub use output::{
    EntryInfo, EntryKind, GenerateContext, Generator, Storage, WalkControl, WalkVisitor,
    WritePolicy,
};
