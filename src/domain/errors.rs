// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures the domain layer can express on its own. Repository
/// implementations translate driver errors into these before they
/// reach the application layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object rejected its input (bad email, blank name, ...).
    #[error("invalid value: {0}")]
    Validation(String),
    /// The row being referenced does not exist.
    #[error("no such record: {0}")]
    NotFound(String),
    /// A uniqueness or referential rule blocked the write.
    #[error("conflicting state: {0}")]
    Conflict(String),
    /// The storage backend failed in a way the domain cannot interpret.
    #[error("storage error: {0}")]
    Persistence(String),
}
