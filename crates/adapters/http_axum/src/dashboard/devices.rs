//! Device detail page, decorated by the registered template extensions.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Response;

use deviceterm_app::ports::DeviceRepository;
use deviceterm_domain::device::Device;
use deviceterm_domain::plugin::{PLUGIN, PluginMeta};

use super::{DashboardError, render};
use crate::error::parse_device_id;
use crate::state::AppState;

/// Model name of devices, as extensions declare it.
const DEVICE_MODEL: &str = "dcim.device";

/// Device detail page template.
#[derive(Template)]
#[template(path = "device_detail.html")]
pub struct DeviceDetailTemplate {
    plugin: PluginMeta,
    device: Device,
    buttons: String,
}

/// Concatenated buttons of every extension that decorates devices.
pub(crate) fn buttons_for<DR>(state: &AppState<DR>, device: &Device) -> String {
    state
        .extensions
        .iter()
        .filter(|ext| ext.model() == DEVICE_MODEL)
        .map(|ext| ext.buttons(device))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `GET /devices/{id}` — device detail with injected buttons.
pub async fn detail<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<Response, DashboardError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;
    let device = state.terminal_service.get_device(device_id).await?;
    let buttons = buttons_for(&state, &device);

    render(&DeviceDetailTemplate {
        plugin: PLUGIN,
        device,
        buttons,
    })
}
