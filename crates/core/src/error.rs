//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Entity accessors and equality are total and never produce one of these;
/// they come from collections of entities (duplicate keys, ambiguous lookups).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested entity was not found.
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. an identifier is already taken).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A lookup expecting at most one entity matched several.
    #[error("expected at most one result, found {0}")]
    NonUniqueResult(usize),
}

impl DomainError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn non_unique(count: usize) -> Self {
        Self::NonUniqueResult(count)
    }
}
