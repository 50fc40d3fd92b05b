//! Device — a record owned by the inventory, read but never written here.

use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::DeviceId;

/// An inventory device as far as terminal access is concerned.
///
/// Addresses keep their prefix length (`10.0.0.108/24`) exactly as the
/// inventory assigns them; callers strip it when they need a bare IP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Inventory primary key.
    pub id: DeviceId,
    /// Display name.
    pub name: String,
    /// Primary IPv4 interface address, if one is assigned.
    pub primary_ip4: Option<IpNetwork>,
    /// Primary IPv6 interface address, if one is assigned.
    pub primary_ip6: Option<IpNetwork>,
}

impl Device {
    /// Start building a device.
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// The preferred primary address: IPv4 first, then IPv6.
    #[must_use]
    pub fn primary_ip(&self) -> Option<IpNetwork> {
        self.primary_ip4.or(self.primary_ip6)
    }

    /// Check the invariants a well-formed record satisfies.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] for a blank name and
    /// [`ValidationError::AddressFamily`] when an address sits in the slot of
    /// the other family.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if let Some(addr) = self.primary_ip4.filter(IpNetwork::is_ipv6) {
            return Err(ValidationError::AddressFamily {
                expected: "IPv4",
                actual: addr.to_string(),
            });
        }
        if let Some(addr) = self.primary_ip6.filter(IpNetwork::is_ipv4) {
            return Err(ValidationError::AddressFamily {
                expected: "IPv6",
                actual: addr.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    primary_ip4: Option<IpNetwork>,
    primary_ip6: Option<IpNetwork>,
}

impl DeviceBuilder {
    /// Set the inventory primary key.
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Assign the primary IPv4 interface address.
    #[must_use]
    pub fn primary_ip4(mut self, addr: IpNetwork) -> Self {
        self.primary_ip4 = Some(addr);
        self
    }

    /// Assign the primary IPv6 interface address.
    #[must_use]
    pub fn primary_ip6(mut self, addr: IpNetwork) -> Self {
        self.primary_ip6 = Some(addr);
        self
    }

    /// Build the device, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] if no id was set, or any error
    /// from [`Device::validate`].
    pub fn build(self) -> Result<Device, ValidationError> {
        let device = Device {
            id: self.id.ok_or(ValidationError::InvalidId)?,
            name: self.name.unwrap_or_default(),
            primary_ip4: self.primary_ip4,
            primary_ip6: self.primary_ip6,
        };
        device.validate()?;
        Ok(device)
    }
}
