//! Domain-specific error types and error handling.

mod types;

pub use types::DispatchError;

use thiserror::Error;
use tr_shared::types::response::ErrorResponse;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to the dispatch pipeline's error taxonomy
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl DomainError {
    /// Stable error code for API consumers
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
            Self::Dispatch(e) => e.error_code(),
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        ErrorResponse::new(err.error_code(), err.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
