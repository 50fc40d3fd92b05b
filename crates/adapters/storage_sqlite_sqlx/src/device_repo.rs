//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use ipnetwork::IpNetwork;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use deviceterm_app::ports::DeviceRepository;
use deviceterm_domain::device::Device;
use deviceterm_domain::error::{DeviceTermError, ValidationError};
use deviceterm_domain::id::DeviceId;

use crate::error::{InvalidRecord, StorageError};

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

fn decode_addr(value: Option<String>) -> Result<Option<IpNetwork>, sqlx::Error> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<IpNetwork>())
        .transpose()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let primary_ip4: Option<String> = row.try_get("primary_ip4")?;
        let primary_ip6: Option<String> = row.try_get("primary_ip6")?;

        let raw_id = id;
        let invalid = |reason| InvalidRecord { id: raw_id, reason }.into_decode();

        let id = u64::try_from(raw_id)
            .ok()
            .and_then(DeviceId::new)
            .ok_or_else(|| invalid(ValidationError::InvalidId))?;

        let device = Device {
            id,
            name,
            primary_ip4: decode_addr(primary_ip4)?,
            primary_ip6: decode_addr(primary_ip6)?,
        };
        device.validate().map_err(invalid)?;
        Ok(Self(device))
    }
}

const INSERT: &str = "INSERT INTO devices (id, name, primary_ip4, primary_ip6) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, primary_ip4, primary_ip6 FROM devices WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, primary_ip4, primary_ip6 FROM devices ORDER BY id";

/// `SQLite`-backed device repository.
#[derive(Clone)]
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Import a device record, as the inventory sync does.
    ///
    /// Not part of the port: the terminal use-cases never write devices.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if the insert fails, e.g. on a
    /// duplicate id.
    pub async fn insert(&self, device: &Device) -> Result<(), StorageError> {
        let id = i64::try_from(device.id.get())
            .map_err(|err| sqlx::Error::Encode(Box::new(err)))?;
        sqlx::query(INSERT)
            .bind(id)
            .bind(&device.name)
            .bind(device.primary_ip4.map(|addr| addr.to_string()))
            .bind(device.primary_ip6.map(|addr| addr.to_string()))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DeviceTermError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Ids beyond i64 cannot be stored, so they cannot exist.
            let Ok(raw) = i64::try_from(id.get()) else {
                return Ok(None);
            };
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(raw)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DeviceTermError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
