//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;

use axum::Router;
use axum::routing::get;

use deviceterm_app::ports::DeviceRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<DR>() -> Router<AppState<DR>>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/devices", get(devices::list::<DR>))
        .route("/devices/{id}", get(devices::get::<DR>))
        .route("/devices/{id}/terminal", get(devices::terminal::<DR>))
}
