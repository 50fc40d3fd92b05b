//! Terminal settings and embed URL construction.
//!
//! The web terminal service is reached by the *browser*, never by this
//! process: all that happens here is choosing which address the terminal
//! should dial and formatting it into the service's `/embed/` URL.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::device::Device;

/// Default URI scheme of the terminal service.
pub const DEFAULT_TERMINAL_SCHEME: &str = "http";
/// Default host of the terminal service.
pub const DEFAULT_TERMINAL_HOST: &str = "host.docker.internal";
/// Default port of the terminal service.
pub const DEFAULT_TERMINAL_PORT: &str = "3000";
/// Default SSH port handed to the terminal service.
pub const DEFAULT_SSH_PORT: &str = "22";

/// Where the web terminal service lives and which SSH port it should dial.
///
/// Values are kept verbatim; only missing keys are replaced by defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalSettings {
    /// URI scheme of the terminal service (`http` or `https`).
    pub terminal_scheme: String,
    /// Host name or address of the terminal service.
    pub terminal_host: String,
    /// Port of the terminal service. Also forwarded as `bep`.
    #[serde(deserialize_with = "string_or_number")]
    pub terminal_port: String,
    /// SSH port the terminal service should connect to on the device.
    #[serde(deserialize_with = "string_or_number")]
    pub ssh_port: String,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            terminal_scheme: DEFAULT_TERMINAL_SCHEME.to_string(),
            terminal_host: DEFAULT_TERMINAL_HOST.to_string(),
            terminal_port: DEFAULT_TERMINAL_PORT.to_string(),
            ssh_port: DEFAULT_SSH_PORT.to_string(),
        }
    }
}

impl TerminalSettings {
    /// Base URL of the terminal service, without path.
    #[must_use]
    pub fn origin(&self) -> String {
        format!(
            "{}://{}:{}",
            self.terminal_scheme, self.terminal_host, self.terminal_port
        )
    }

    /// Build the embed URL for `device`.
    ///
    /// The query carries exactly `host`, `port`, `name` and `bep`, in that
    /// order, each value form-urlencoded. `bep` repeats `terminal_port`; the
    /// terminal service expects it there.
    #[must_use]
    pub fn embed_url(&self, device: &Device) -> String {
        let host = select_host(device);
        self.embed_url_for(&host, &device.name)
    }

    fn embed_url_for(&self, host: &str, name: &str) -> String {
        let query = [
            ("host", host),
            ("port", self.ssh_port.as_str()),
            ("name", name),
            ("bep", self.terminal_port.as_str()),
        ]
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
        format!("{}/embed/?{query}", self.origin())
    }

    /// Resolve everything a terminal page needs for `device`.
    #[must_use]
    pub fn session(&self, device: Device) -> TerminalSession {
        let host = select_host(&device);
        let iframe_url = self.embed_url_for(&host, &device.name);
        TerminalSession {
            device,
            iframe_url,
            host_ip: host,
        }
    }
}

/// Pick the value the terminal should connect to.
///
/// Primary IPv4 wins, then primary IPv6, each without its prefix length.
/// A device with neither falls back to its name and relies on the terminal
/// service resolving it.
#[must_use]
pub fn select_host(device: &Device) -> String {
    device
        .primary_ip()
        .map_or_else(|| device.name.clone(), |addr| addr.ip().to_string())
}

/// Form-urlencode one query value the way the terminal service's clients do:
/// space becomes `+`, `~` stays literal and `*` is escaped.
fn encode_component(value: &str) -> String {
    // `byte_serialize` emits `%7E` only for a literal `~` (a `%` becomes
    // `%25`) and `*` only for a literal `*`.
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace("%7E", "~")
        .replace('*', "%2A")
}

/// A device together with its resolved embed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalSession {
    /// The device being connected to.
    pub device: Device,
    /// URL to load in the terminal iframe.
    pub iframe_url: String,
    /// The address (or name) chosen as the SSH target.
    pub host_ip: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;

    impl serde::de::Visitor<'_> for Visitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or an integer")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: serde::de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(Visitor)
}
