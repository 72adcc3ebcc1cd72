//! Application layer errors.
//!
//! These errors represent failures in orchestration, not scaffold logic.
//! Scaffold logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem write or directory creation failed.
    #[error("Filesystem error at {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// An artifact already exists at the target location.
    #[error("File already exists at {path}")]
    ArtifactExists { path: PathBuf },

    /// The pair is incomplete on disk: one artifact was written, its twin
    /// failed, and removing the first one failed too.
    #[error("Incomplete pair: {kept} was written but {failed} failed: {reason}")]
    PartialArtifactSet {
        kept: PathBuf,
        failed: PathBuf,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the output directory is not read-only".into(),
            ],
            Self::ArtifactExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Or pick a different name or output directory".into(),
            ],
            Self::PartialArtifactSet { kept, .. } => vec![
                format!("Remove {} by hand before retrying", kept.display()),
                "Header and source must be regenerated together".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WriteFailed { .. } | Self::PartialArtifactSet { .. } => ErrorCategory::Internal,
            Self::ArtifactExists { .. } => ErrorCategory::Validation,
        }
    }
}
