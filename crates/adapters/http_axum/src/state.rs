//! Shared application state for axum handlers.

use std::sync::Arc;

use deviceterm_app::ports::DeviceRepository;
use deviceterm_app::services::terminal_service::TerminalService;

use crate::extensions::{DeviceTerminalButton, TemplateExtension};

/// Application state shared across all axum handlers.
///
/// Generic over the device repository to avoid dynamic dispatch on the hot
/// path. `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<DR> {
    /// Resolves devices into terminal sessions.
    pub terminal_service: Arc<TerminalService<DR>>,
    /// Mount path of the plugin pages, without surrounding slashes.
    pub base_path: Arc<str>,
    /// Extensions whose buttons are injected into device pages.
    pub extensions: Arc<[Box<dyn TemplateExtension>]>,
}

impl<DR> Clone for AppState<DR> {
    fn clone(&self) -> Self {
        Self {
            terminal_service: Arc::clone(&self.terminal_service),
            base_path: Arc::clone(&self.base_path),
            extensions: Arc::clone(&self.extensions),
        }
    }
}

impl<DR> AppState<DR>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    /// Create the state with the terminal button registered.
    ///
    /// `base_path` must already be normalized (no leading or trailing `/`).
    pub fn new(terminal_service: TerminalService<DR>, base_path: impl Into<Arc<str>>) -> Self {
        let base_path = base_path.into();
        let extensions: Vec<Box<dyn TemplateExtension>> =
            vec![Box::new(DeviceTerminalButton::new(Arc::clone(&base_path)))];
        Self {
            terminal_service: Arc::new(terminal_service),
            base_path,
            extensions: extensions.into(),
        }
    }
}
