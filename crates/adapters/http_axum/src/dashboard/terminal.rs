//! Terminal page — the web terminal embedded in an iframe.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Response;

use deviceterm_app::ports::DeviceRepository;
use deviceterm_domain::device::Device;
use deviceterm_domain::plugin::{PLUGIN, PluginMeta};

use super::{DashboardError, render};
use crate::error::parse_device_id;
use crate::state::AppState;

/// Terminal page template.
#[derive(Template)]
#[template(path = "device_terminal.html")]
pub struct DeviceTerminalTemplate {
    plugin: PluginMeta,
    device: Device,
    iframe_url: String,
    host_ip: String,
}

/// `GET /<base>/device/{id}/`
pub async fn device_terminal<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<Response, DashboardError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;
    let session = state.terminal_service.resolve_embed_url(device_id).await?;

    render(&DeviceTerminalTemplate {
        plugin: PLUGIN,
        device: session.device,
        iframe_url: session.iframe_url,
        host_ip: session.host_ip,
    })
}
