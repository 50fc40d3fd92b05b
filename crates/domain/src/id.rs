//! Typed identifier for inventory devices.
//!
//! The inventory keys devices by a positive integer. The newtype keeps those
//! keys from being mixed up with ports or other numbers flowing through the
//! terminal URL.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Device`](crate::device::Device).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(NonZeroU64);

impl DeviceId {
    /// Wrap a raw primary key, returning `None` for zero.
    #[must_use]
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// Access the raw primary key.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The text was not a positive decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid device id: {0:?}")]
pub struct ParseDeviceIdError(String);

impl FromStr for DeviceId {
    type Err = ParseDeviceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `u64::from_str` accepts a leading `+`, the inventory's routes do not.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDeviceIdError(s.to_string()));
        }
        s.parse::<NonZeroU64>()
            .map(Self)
            .map_err(|_| ParseDeviceIdError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_zero_when_constructing() {
        assert!(DeviceId::new(0).is_none());
        assert_eq!(DeviceId::new(12).map(DeviceId::get), Some(12));
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = DeviceId::new(108).unwrap();
        let parsed: DeviceId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_text() {
        assert!(DeviceId::from_str("abc").is_err());
        assert!(DeviceId::from_str("").is_err());
        assert!(DeviceId::from_str("+5").is_err());
        assert!(DeviceId::from_str("-5").is_err());
        assert!(DeviceId::from_str("0").is_err());
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let id = DeviceId::new(3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let parsed: DeviceId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, id);
    }
}
