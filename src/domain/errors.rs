// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("no free slug derived from `{base}` after {attempts} attempts")]
    SlugSpaceExhausted { base: String, attempts: u64 },
    #[error("unique constraint violated: {0}")]
    UniqueConstraintViolation(String),
}

impl DomainError {
    /// True when the storage layer rejected a write because the slug was taken.
    pub fn is_slug_collision(&self) -> bool {
        matches!(self, Self::UniqueConstraintViolation(_))
    }
}
