//! # deviceterm-adapter-storage-sqlite-sqlx
//!
//! `SQLite` inventory adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `DeviceRepository` port defined in `deviceterm-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows, rejecting rows that break
//!   device invariants
//!
//! ## Dependency rule
//! Depends on `deviceterm-app` (for port traits) and `deviceterm-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_repo;
mod error;
mod pool;

pub use device_repo::SqliteDeviceRepository;
pub use error::{InvalidRecord, StorageError};
pub use pool::{Config, DEFAULT_MAX_CONNECTIONS, Database};
