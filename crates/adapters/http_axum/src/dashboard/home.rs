//! Home page — every device with its toolbar buttons.

use askama::Template;
use axum::extract::State;
use axum::response::Response;

use deviceterm_app::ports::DeviceRepository;
use deviceterm_domain::device::Device;
use deviceterm_domain::plugin::{PLUGIN, PluginMeta};

use super::{DashboardError, render};
use crate::state::AppState;

/// A device list row: the record plus its rendered buttons.
pub struct DeviceRow {
    device: Device,
    buttons: String,
}

/// Device list page template.
#[derive(Template)]
#[template(path = "device_list.html")]
pub struct DeviceListTemplate {
    plugin: PluginMeta,
    rows: Vec<DeviceRow>,
}

/// `GET /` — list all devices.
pub async fn index<DR>(State(state): State<AppState<DR>>) -> Result<Response, DashboardError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.terminal_service.list_devices().await?;

    let rows = devices
        .into_iter()
        .map(|device| {
            let buttons = super::devices::buttons_for(&state, &device);
            DeviceRow { device, buttons }
        })
        .collect();

    render(&DeviceListTemplate {
        plugin: PLUGIN,
        rows,
    })
}
