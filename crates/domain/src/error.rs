//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DeviceTermError`] via `From`.

use std::error::Error;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum DeviceTermError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

/// Reasons a domain object can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A device id of zero was supplied.
    #[error("device id must be a positive integer")]
    InvalidId,

    /// The display name is empty or whitespace.
    #[error("name must not be empty")]
    EmptyName,

    /// An address was assigned to the wrong family slot.
    #[error("expected an {expected} address, got {actual}")]
    AddressFamily {
        /// The family the slot accepts.
        expected: &'static str,
        /// The address that was supplied.
        actual: String,
    },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier as supplied by the caller.
    pub id: String,
}
