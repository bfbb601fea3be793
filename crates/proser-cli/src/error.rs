//! Error handling for the Proser CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use proser_core::error::ProserError;

use proser_core::error::ErrorCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The target project directory cannot be used.
    #[error("Invalid target {path}: {reason}")]
    InvalidTarget { path: PathBuf, reason: String },

    /// `proser config get` was asked for a key that does not exist.
    #[error("Unknown configuration key '{key}'")]
    UnknownConfigKey { key: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `proser-core` or its adapters.
    #[error("Scaffolding failed: {0}")]
    Core(#[from] ProserError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature not compiled into this build.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::InvalidTarget { path, .. } => vec![
                format!("'{}' must be an existing directory", path.display()),
                "Proser scaffolds into existing projects; create the directory first".into(),
            ],

            Self::UnknownConfigKey { key } => vec![
                format!("'{}' is not a configuration key", key),
                "List every key with: proser config list".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the config file location with: proser config path".into(),
                "Use 'proser init' to create a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{}' feature is not available in this build", feature),
                format!(
                    "Install with the feature enabled: cargo install proser-cli --features {}",
                    feature
                ),
                "Or pass --yes / --answers to run without prompts".into(),
            ],
        }
    }

    /// Category shared with `proser-core`; drives the exit code and log level.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidTarget { .. } | Self::Cancelled => {
                ErrorCategory::Validation
            }
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => core.category(),
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// `2` bad input, `3` missing resource, `4` configuration, `1` anything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Text written to stderr before exiting.
    ///
    /// The cause chain is listed only when `verbose`; `color` adds ANSI styling.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("  caused by: {err}");
                out.push_str(&paint(&line, |t| t.dimmed().to_string()));
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  - {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&paint(
                "\nRe-run with -v to see the underlying cause.\n",
                |t| t.dimmed().to_string(),
            ));
        }
        out
    }

    /// Emit the error as a tracing event at a level matching its category.
    pub fn log(&self) {
        let cause = self.source().map(ToString::to_string);
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::NotFound => {
                tracing::warn!(category = ?self.category(), cause = cause.as_deref(), "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category = ?self.category(), cause = cause.as_deref(), "{self}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proser_core::application::ApplicationError;
    use std::io;

    #[test]
    fn invalid_target_suggests_creating_directory() {
        let err = CliError::InvalidTarget {
            path: PathBuf::from("/tmp/missing"),
            reason: "does not exist".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("existing directory")));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_key_is_not_found() {
        let err = CliError::UnknownConfigKey {
            key: "scan.nope".into(),
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.suggestions().iter().any(|s| s.contains("config list")));
    }

    #[test]
    fn core_categories_map_to_exit_codes() {
        let not_found: CliError = ProserError::from(ApplicationError::ProjectTypeNotFound {
            name: "mobile".into(),
        })
        .into();
        assert_eq!(not_found.exit_code(), 3);

        let config: CliError = ProserError::configuration("bad answers").into();
        assert_eq!(config.exit_code(), 4);
    }

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(CliError::config("x").exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn plain_render_lists_suggestions_and_hint() {
        let err = CliError::InvalidTarget {
            path: PathBuf::from("/tmp/x"),
            reason: "not a directory".into(),
        };
        let s = err.render(false, false);
        assert!(s.starts_with("\nError: Invalid target /tmp/x"));
        assert!(s.contains("  - '/tmp/x' must be an existing directory"));
        assert!(s.contains("Re-run with -v"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_shows_cause_chain() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.render(true, false);
        assert!(s.contains("caused by: disk full"));
        assert!(!s.contains("Re-run with -v"));
    }

    #[test]
    fn colored_render_uses_ansi() {
        assert!(CliError::Cancelled.render(false, true).contains('\u{1b}'));
    }
}
