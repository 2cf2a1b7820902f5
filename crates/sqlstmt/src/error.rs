//! Error types for sqlstmt

use thiserror::Error;

/// Result type alias for statement-building operations
pub type StmtResult<T> = Result<T, StmtError>;

/// Error types for statement building
///
/// The composition engine normalizes almost every input defensively, so the
/// only fallible path is strict-mode identifier escaping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StmtError {
    /// An identifier segment contained characters outside `[A-Za-z0-9_]`
    /// while the escaper was in strict mode.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl StmtError {
    /// Create an invalid-identifier error
    pub fn invalid_identifier(ident: impl Into<String>) -> Self {
        Self::InvalidIdentifier(ident.into())
    }

    /// Check if this is an invalid-identifier error
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier(_))
    }
}
