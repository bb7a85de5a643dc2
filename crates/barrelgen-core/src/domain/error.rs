use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("No source roots configured")]
    NoSources,

    #[error("No start directories configured")]
    NoStartDirs,

    #[error("Invalid basename '{name}': {reason}")]
    InvalidBasename { name: String, reason: String },

    #[error("Invalid generator extension '{ext}': {reason}")]
    InvalidExtension { ext: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoSources => vec![
                "Add at least one source root to the configuration".into(),
                "Sources are searched in precedence order (first wins)".into(),
            ],
            Self::NoStartDirs => vec![
                "Add at least one start directory to the configuration".into(),
                "Each start directory receives one generated file per registered extension"
                    .into(),
            ],
            Self::InvalidBasename { name, reason } => vec![
                format!("Basename '{}' is invalid: {}", name, reason),
                "Use a bare file stem like 'index' - no directories, no extension".into(),
            ],
            Self::InvalidExtension { ext, reason } => vec![
                format!("Extension '{}' is invalid: {}", ext, reason),
                "Use extensions like '.tsx' or 'tsx' (the leading dot is optional)".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoSources
            | Self::NoStartDirs
            | Self::InvalidBasename { .. }
            | Self::InvalidExtension { .. } => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
