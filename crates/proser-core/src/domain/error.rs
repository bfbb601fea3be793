// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Path invariants
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the target root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Empty relative path")]
    EmptyPath,

    #[error("Duplicate generated path: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Ownership
    // ========================================================================
    #[error("generators '{first}' and '{second}' own overlapping output paths ({first_namespace} / {second_namespace})")]
    OverlappingNamespaces {
        first: String,
        second: String,
        first_namespace: String,
        second_namespace: String,
    },

    #[error("generator '{generator}' emitted '{path}' outside its namespace {namespace}")]
    PathOutsideNamespace {
        generator: String,
        path: String,
        namespace: String,
    },

    // ========================================================================
    // Registry
    // ========================================================================
    #[error("Project type '{name}' is already registered")]
    DuplicateProjectType { name: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::OverlappingNamespaces { first, second, .. } => vec![
                format!("'{}' and '{}' cannot be combined in one project type", first, second),
                "Give each generator its own output file or directory".into(),
            ],
            Self::PathOutsideNamespace { generator, .. } => vec![
                format!("Generator '{}' is misbehaving", generator),
                "This is a bug in the generator; please report it".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{}' was produced twice by the same generator", path),
                "This is a bug in the generator; please report it".into(),
            ],
            Self::DuplicateProjectType { name } => vec![
                format!("Choose a different name than '{}'", name),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::EmptyPath
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::OverlappingNamespaces { .. } | Self::DuplicateProjectType { .. } => {
                ErrorCategory::Configuration
            }
            Self::DuplicatePath { .. } | Self::PathOutsideNamespace { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
