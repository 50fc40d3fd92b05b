//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use deviceterm_domain::error::{DeviceTermError, NotFoundError};
use deviceterm_domain::id::DeviceId;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Split a [`DeviceTermError`] into the status code and the message safe to
/// show to a client.
pub(crate) fn classify(err: &DeviceTermError) -> (StatusCode, String) {
    match err {
        DeviceTermError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        DeviceTermError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        DeviceTermError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Parse a device id from a path segment.
///
/// Anything that is not a positive integer cannot name a device, so it is
/// reported as not found rather than as a bad request.
pub(crate) fn parse_device_id(raw: &str) -> Result<DeviceId, DeviceTermError> {
    raw.parse().map_err(|_| {
        NotFoundError {
            entity: "Device",
            id: raw.to_string(),
        }
        .into()
    })
}

/// Maps [`DeviceTermError`] to an HTTP response with appropriate status code.
pub struct ApiError(DeviceTermError);

impl From<DeviceTermError> for ApiError {
    fn from(err: DeviceTermError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = classify(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
