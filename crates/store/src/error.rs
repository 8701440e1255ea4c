//! Store error model.

use thiserror::Error;

use entikit_core::DomainError;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,
}
