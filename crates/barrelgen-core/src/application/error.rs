//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The partition resolver rejected (unreadable or malformed manifest,
    /// I/O failure). Terminates the affected root's pipeline.
    #[error("Partition resolution failed for {manifest}: {reason}")]
    ResolverFailed { manifest: PathBuf, reason: String },

    /// Filesystem operation failed (directory listing during classification).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ResolverFailed { manifest, .. } => vec![
                format!("Could not resolve imports via: {}", manifest.display()),
                "Check that the manifest file exists and is valid JSON".into(),
                "Run: barrelgen init to create a starter configuration".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the directory exists and is readable".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResolverFailed { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
