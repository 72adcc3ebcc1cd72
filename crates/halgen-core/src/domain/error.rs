// ============================================================================
// domain/error.rs - SCAFFOLD INPUT ERROR DOMAIN
// ============================================================================

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
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid component name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid brief description: {reason}")]
    InvalidBrief { reason: String },

    #[error("Unknown dialect: '{0}'")]
    UnknownDialect(String),

    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error("Component type '{tag}' does not apply to C scaffolds")]
    TagNotApplicable { tag: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { reason, .. } => vec![
                format!("Problem: {}", reason),
                "Names must start with a letter or underscore".into(),
                "Only letters, digits, and underscores are allowed".into(),
            ],
            Self::InvalidBrief { .. } => vec![
                "Provide a short one-line description with --brief".into(),
                "Example: --brief \"Flash storage driver\"".into(),
            ],
            Self::UnknownDialect(_) => vec![
                "Supported dialects: cpp, c".into(),
            ],
            Self::TagNotApplicable { tag } => vec![
                format!("'{}' selects a C++ interface; C scaffolds have none", tag),
                "Drop --type, or use --lang cpp".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::InvalidBrief { .. } | Self::UnknownDialect(_) => {
                ErrorCategory::Validation
            }
            Self::TagNotApplicable { .. } => ErrorCategory::Compatibility,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Internal,
}
