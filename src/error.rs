//! Error types for the member registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::errors`].

use crate::domain::FieldError;
use thiserror::Error;

/// Errors raised by a member repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No active member with this id
    #[error("Member not found: {0}")]
    NotFound(String),

    /// Uniqueness constraint on the identifier was violated
    #[error("Identifier '{0}' is already registered")]
    DuplicateIdentifier(String),

    /// Backend failure (lock poisoning, connection loss, ...)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors returned by the member service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// One or more fields failed validation
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<FieldError>),

    /// The identifier collides with an existing member
    #[error("Identifier '{0}' is already registered")]
    DuplicateIdentifier(String),

    /// Member does not exist (or was deleted)
    #[error("Member not found: {0}")]
    NotFound(String),

    /// Repository failure other than a conflict or a miss
    #[error("Repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    /// Field errors carried by this error, if any.
    ///
    /// A duplicate identifier is reported as a single conflict-class field error.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::Validation(errors) => errors.clone(),
            Self::DuplicateIdentifier(digits) => vec![FieldError::duplicate_identifier(digits)],
            _ => Vec::new(),
        }
    }

    /// True for collisions with existing state.
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::DuplicateIdentifier(_) => true,
            Self::Validation(errors) => errors.iter().any(FieldError::is_conflict),
            _ => false,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound(id),
            RepositoryError::DuplicateIdentifier(digits) => Self::DuplicateIdentifier(digits),
            RepositoryError::Storage(message) => Self::Repository(message),
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
