//! Application services - orchestrate use cases.

pub mod directory_scanner;
pub mod scaffold_service;
pub mod writer;

pub use directory_scanner::{DEFAULT_MAX_DEPTH, DirectoryScanner};
pub use scaffold_service::{PlannedOutput, ScaffoldReport, ScaffoldService};
pub use writer::{GeneratorReport, WriteWarning, Writer};
