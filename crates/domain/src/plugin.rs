//! Static description of the plugin.

/// Identity of the plugin as presented to the inventory and to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginMeta {
    /// Machine name.
    pub name: &'static str,
    /// Human-readable name.
    pub verbose_name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Release version.
    pub version: &'static str,
    /// Path segment the plugin's pages are mounted under.
    pub base_path: &'static str,
}

/// The deviceterm plugin.
pub const PLUGIN: PluginMeta = PluginMeta {
    name: "netbox_deviceterm",
    verbose_name: "Device Terminal (VelociTerm)",
    description: "Embed VelociTerm SSH terminal for devices",
    version: env!("CARGO_PKG_VERSION"),
    base_path: "deviceterm",
};

/// Normalize a configured mount path: no surrounding slashes or whitespace.
///
/// Returns `None` when nothing is left, which callers treat as invalid.
#[must_use]
pub fn normalize_base_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mount_under_deviceterm_by_default() {
        assert_eq!(PLUGIN.base_path, "deviceterm");
        assert_eq!(PLUGIN.version, "0.1.0");
    }

    #[test]
    fn should_strip_slashes_from_base_path() {
        assert_eq!(normalize_base_path("/tools/term/").as_deref(), Some("tools/term"));
        assert_eq!(normalize_base_path(" deviceterm ").as_deref(), Some("deviceterm"));
    }

    #[test]
    fn should_reject_empty_base_path() {
        assert_eq!(normalize_base_path("///"), None);
        assert_eq!(normalize_base_path(""), None);
    }
}
