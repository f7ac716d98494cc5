//! Domain error model.

use thiserror::Error;

use crate::id::EntityId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// key conflicts, missing records). IO and serialization concerns belong in
/// the crates that touch files.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity with this key is already stored.
    #[error("entity with id {0} already exists")]
    DuplicateKey(EntityId),

    /// No entity is stored under this key.
    #[error("entity with id {0} not found")]
    NotFound(EntityId),

    /// A field value failed validation (e.g. negative quantity).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An input record is missing one or more required fields.
    #[error("missing field: {0}")]
    MissingField(String),

    /// An input field could not be parsed into its expected type.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl DomainError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::MissingField(msg.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}
