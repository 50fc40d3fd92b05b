//! Storage port — read access to inventory records.
//!
//! Devices belong to the inventory. deviceterm only looks them up, so the
//! port has no write methods.

use std::future::Future;

use deviceterm_domain::device::Device;
use deviceterm_domain::error::DeviceTermError;
use deviceterm_domain::id::DeviceId;

/// Read-only access to inventory devices.
pub trait DeviceRepository {
    /// Fetch one device, `None` when the id is unknown.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DeviceTermError>> + Send;

    /// Fetch every device, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DeviceTermError>> + Send;
}
