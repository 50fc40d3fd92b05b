//! # deviceterm-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **terminal page** (`/<base>/device/{id}/`): an iframe pointing
//!   at the web terminal service's embed URL
//! - Inject the **Terminal button** into device pages through
//!   [`extensions::TemplateExtension`]
//! - Serve a small **JSON API** for programmatic access
//!   (`/api/devices`, `/api/devices/{id}/terminal`)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS pages
//! Every page is rendered server-side as complete HTML with askama. The
//! browser loads the terminal itself straight from the terminal service.
//!
//! ## Dependency rule
//! Depends on `deviceterm-app` (for port traits and services) and
//! `deviceterm-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod extensions;
pub mod router;
pub mod state;
