//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use deviceterm_app::ports::DeviceRepository;
use deviceterm_domain::device::Device;
use deviceterm_domain::terminal::TerminalSession;

use crate::error::{ApiError, parse_device_id};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the terminal endpoint.
pub enum TerminalResponse {
    Ok(Json<TerminalSession>),
}

impl IntoResponse for TerminalResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/devices`
pub async fn list<DR>(State(state): State<AppState<DR>>) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.terminal_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/{id}`
pub async fn get<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;
    let device = state.terminal_service.get_device(device_id).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `GET /api/devices/{id}/terminal` — the embed URL and chosen host.
pub async fn terminal<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<TerminalResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;
    let session = state.terminal_service.resolve_embed_url(device_id).await?;
    Ok(TerminalResponse::Ok(Json(session)))
}
