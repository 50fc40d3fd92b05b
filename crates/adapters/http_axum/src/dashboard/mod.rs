//! Server-side rendered HTML pages (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod terminal;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use deviceterm_app::ports::DeviceRepository;
use deviceterm_domain::error::DeviceTermError;
use deviceterm_domain::plugin::{PLUGIN, PluginMeta};

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
///
/// The terminal page is mounted under `base_path`, with and without the
/// trailing slash.
pub fn routes<DR>(base_path: &str) -> Router<AppState<DR>>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<DR>))
        .route("/devices/{id}", get(devices::detail::<DR>))
        .route(
            &format!("/{base_path}/device/{{id}}/"),
            get(terminal::device_terminal::<DR>),
        )
        .route(
            &format!("/{base_path}/device/{{id}}"),
            get(terminal::device_terminal::<DR>),
        )
}

/// Render a template into an HTML response.
pub(crate) fn render<T: Template>(template: &T) -> Result<Response, DashboardError> {
    let body = template.render()?;
    Ok(Html(body).into_response())
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    plugin: PluginMeta,
    status: u16,
    message: &'a str,
}

/// Errors raised while producing a dashboard page.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The application layer failed.
    #[error(transparent)]
    App(#[from] DeviceTermError),
    /// The template could not be rendered.
    #[error("template rendering failed")]
    Render(#[from] askama::Error),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::App(err) => crate::error::classify(err),
            Self::Render(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let page = ErrorTemplate {
            plugin: PLUGIN,
            status: status.as_u16(),
            message: &message,
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, message).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deviceterm_domain::error::NotFoundError;

    #[test]
    fn should_convert_app_error_and_keep_its_message() {
        let err: DashboardError = DeviceTermError::from(NotFoundError {
            entity: "Device",
            id: "3".to_string(),
        })
        .into();
        assert!(matches!(err, DashboardError::App(DeviceTermError::NotFound(_))));
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn should_render_not_found_page_with_status() {
        let err = DashboardError::from(DeviceTermError::from(NotFoundError {
            entity: "Device",
            id: "3".to_string(),
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_describe_render_failure() {
        let err = DashboardError::from(askama::Error::Fmt(std::fmt::Error));
        assert_eq!(err.to_string(), "template rendering failed");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
