// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Outcome categories for use-case execution. The HTTP layer maps each
/// variant onto exactly one status code, so services pick the variant
/// for the status they mean.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("authentication required: {0}")]
    Unauthorized(String),

    #[error("access denied: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Infrastructure(String),

    /// Errors surfaced by repositories; mapped per-variant at the edge.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
