//! Template extensions — HTML fragments injected into device pages.
//!
//! A device page asks every registered extension for its buttons and
//! renders them verbatim in its toolbar.

use std::fmt::Display;
use std::sync::Arc;

use deviceterm_domain::device::Device;
use deviceterm_domain::id::DeviceId;

/// Contributes HTML to the pages of one kind of inventory record.
pub trait TemplateExtension: Send + Sync {
    /// Inventory model the extension decorates (`app_label.model`).
    fn model(&self) -> &'static str;

    /// Toolbar buttons for `device`, as trusted HTML.
    fn buttons(&self, device: &Device) -> String;
}

/// Adds a "Terminal" button to device pages.
pub struct DeviceTerminalButton {
    base_path: Arc<str>,
}

impl DeviceTerminalButton {
    /// Link buttons to terminal pages mounted under `base_path`.
    #[must_use]
    pub fn new(base_path: Arc<str>) -> Self {
        Self { base_path }
    }
}

impl TemplateExtension for DeviceTerminalButton {
    fn model(&self) -> &'static str {
        "dcim.device"
    }

    fn buttons(&self, device: &Device) -> String {
        render_button(&self.base_path, device.id)
    }
}

/// Path of the terminal page for `id` under `base_path`.
pub fn terminal_path(base_path: &str, id: impl Display) -> String {
    format!("/{base_path}/device/{id}/")
}

/// The "Terminal" anchor for a device, opening its terminal page in a new tab.
///
/// `base_path` is operator configuration and is emitted without escaping.
#[must_use]
pub fn render_button(base_path: &str, id: DeviceId) -> String {
    let href = terminal_path(base_path, id);
    format!(
        r#"<a href="{href}" class="btn btn-sm btn-primary" target="_blank">
    <i class="mdi mdi-console"></i> Terminal
</a>"#
    )
}
