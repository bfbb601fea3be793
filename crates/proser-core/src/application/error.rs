//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, ProserError};

/// Coarse classification of a storage failure, shared by every backend so
/// callers can branch on "not found" without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    NotFound,
    AlreadyExists,
    NotADirectory,
    Io,
}

impl fmt::Display for StorageErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotFound => "not found",
            Self::AlreadyExists => "already exists",
            Self::NotADirectory => "not a directory",
            Self::Io => "i/o error",
        };
        f.write_str(s)
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A storage operation failed.
    #[error("Storage {operation} failed at {path} ({kind}): {reason}")]
    Storage {
        path: PathBuf,
        operation: &'static str,
        kind: StorageErrorKind,
        reason: String,
    },

    /// The enumeration mechanism itself failed while scanning.
    #[error("Traversal of {root} failed: {source}")]
    Traversal {
        root: PathBuf,
        source: Box<ProserError>,
    },

    /// Lookup of an unregistered project type.
    #[error("Project type not found: {name}")]
    ProjectTypeNotFound { name: String },

    /// A generator could not compute its output.
    #[error("Generator '{generator}' failed: {source}")]
    GeneratorFailed {
        generator: String,
        source: Box<ProserError>,
    },

    /// Persisting a generator's output failed.
    #[error("Generator '{generator}' could not write {path}: {source}")]
    WriteFailed {
        generator: String,
        path: PathBuf,
        source: Box<ProserError>,
    },

    /// The target root is missing or not a directory.
    #[error("Invalid target directory {path}: {reason}")]
    InvalidTargetRoot { path: PathBuf, reason: String },

    /// Shared storage lock poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    StorageLockPoisoned,
}

impl ApplicationError {
    pub fn storage(
        path: impl Into<PathBuf>,
        operation: &'static str,
        kind: StorageErrorKind,
        reason: impl Into<String>,
    ) -> Self {
        Self::Storage {
            path: path.into(),
            operation,
            kind,
            reason: reason.into(),
        }
    }

    pub fn not_found(path: impl Into<PathBuf>, operation: &'static str) -> Self {
        Self::storage(path, operation, StorageErrorKind::NotFound, "no such file or directory")
    }

    /// Whether this is a lookup miss a caller may recover from.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Storage {
                kind: StorageErrorKind::NotFound,
                ..
            } | Self::ProjectTypeNotFound { .. }
        )
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Storage { path, kind, .. } => match kind {
                StorageErrorKind::NotFound => vec![
                    format!("Nothing exists at: {}", path.display()),
                    "Check the path for typos".into(),
                ],
                _ => vec![
                    format!("Failed to access: {}", path.display()),
                    "Check that you have write permissions".into(),
                    "Ensure there is free space on the device".into(),
                ],
            },
            Self::Traversal { root, .. } => vec![
                format!("Could not read the directory tree at {}", root.display()),
                "Check that the directory is readable".into(),
            ],
            Self::ProjectTypeNotFound { name } => vec![
                format!("Unknown project type: {}", name),
                "Try: proser types to see available project types".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions in the target directory".into(),
            ],
            Self::InvalidTargetRoot { path, .. } => vec![
                format!("Target: {}", path.display()),
                "Pass an existing directory, or omit it to use the current one".into(),
            ],
            Self::GeneratorFailed { source, .. } => source.suggestions(),
            Self::StorageLockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Storage {
                kind: StorageErrorKind::NotFound,
                ..
            }
            | Self::ProjectTypeNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidTargetRoot { .. } => ErrorCategory::Validation,
            Self::GeneratorFailed { source, .. } => source.category(),
            Self::Storage { .. }
            | Self::Traversal { .. }
            | Self::WriteFailed { .. }
            | Self::StorageLockPoisoned => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_recoverable() {
        let err = ApplicationError::not_found("/x", "stat");
        assert!(err.is_not_found());
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("/x"));
    }

    #[test]
    fn write_failure_names_generator_and_path() {
        let err = ApplicationError::WriteFailed {
            generator: "agents-md".into(),
            path: "/out/AGENTS.md".into(),
            source: Box::new(
                ApplicationError::storage("/out/AGENTS.md", "write", StorageErrorKind::Io, "disk full")
                    .into(),
            ),
        };
        let msg = err.to_string();
        assert!(msg.contains("agents-md"));
        assert!(msg.contains("/out/AGENTS.md"));
        assert!(msg.contains("disk full"));
        assert!(!err.is_not_found());
    }
}
