//! Storage-specific error types.

use deviceterm_domain::error::{DeviceTermError, ValidationError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for DeviceTermError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// A row written by the inventory sync that does not form a valid device.
///
/// Carried inside [`sqlx::Error::Decode`], so it surfaces as a storage
/// failure: the data is broken, not the request.
#[derive(Debug, thiserror::Error)]
#[error("device row {id} is invalid")]
pub struct InvalidRecord {
    /// Primary key of the offending row.
    pub id: i64,
    /// Invariant the row violates.
    #[source]
    pub reason: ValidationError,
}

impl InvalidRecord {
    pub(crate) fn into_decode(self) -> sqlx::Error {
        sqlx::Error::Decode(Box::new(self))
    }
}
