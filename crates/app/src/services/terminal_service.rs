//! Terminal service — resolves a device into the embed URL of the web
//! terminal.
//!
//! Nothing is written and no outbound call is made: the service reads one
//! device and formats a URL that the browser will load.

use deviceterm_domain::device::Device;
use deviceterm_domain::error::DeviceTermError;
use deviceterm_domain::id::DeviceId;
use deviceterm_domain::terminal::{TerminalSession, TerminalSettings};

use crate::ports::DeviceRepository;
use crate::services::device_service::DeviceService;

/// Application service producing terminal sessions for devices.
pub struct TerminalService<R> {
    devices: DeviceService<R>,
    settings: TerminalSettings,
}

impl<R: DeviceRepository> TerminalService<R> {
    /// Create a new service from a device repository and fixed settings.
    pub fn new(repo: R, settings: TerminalSettings) -> Self {
        Self {
            devices: DeviceService::new(repo),
            settings,
        }
    }

    /// Resolve the embed URL for a device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceTermError::NotFound`] when the device does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_embed_url(&self, id: DeviceId) -> Result<TerminalSession, DeviceTermError> {
        let device = self.devices.get_device(id).await?;
        let session = self.settings.session(device);
        tracing::debug!(host = %session.host_ip, url = %session.iframe_url, "resolved terminal");
        Ok(session)
    }

    /// Look up a single device.
    ///
    /// # Errors
    ///
    /// See [`DeviceService::get_device`].
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, DeviceTermError> {
        self.devices.get_device(id).await
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// See [`DeviceService::list_devices`].
    pub async fn list_devices(&self) -> Result<Vec<Device>, DeviceTermError> {
        self.devices.list_devices().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    struct FixedRepo(Vec<Device>);

    impl DeviceRepository for FixedRepo {
        fn get_by_id(
            &self,
            id: DeviceId,
        ) -> impl Future<Output = Result<Option<Device>, DeviceTermError>> + Send {
            let found = self.0.iter().find(|d| d.id == id).cloned();
            async { Ok(found) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DeviceTermError>> + Send {
            let all = self.0.clone();
            async { Ok(all) }
        }
    }

    struct BrokenRepo;

    impl DeviceRepository for BrokenRepo {
        fn get_by_id(
            &self,
            _id: DeviceId,
        ) -> impl Future<Output = Result<Option<Device>, DeviceTermError>> + Send {
            async { Err(DeviceTermError::Storage(Box::new(std::io::Error::other("down")))) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DeviceTermError>> + Send {
            async { Err(DeviceTermError::Storage(Box::new(std::io::Error::other("down")))) }
        }
    }

    fn id(raw: u64) -> DeviceId {
        DeviceId::new(raw).unwrap()
    }

    fn t1000() -> Device {
        Device::builder()
            .id(id(108))
            .name("T1000")
            .primary_ip4("10.0.0.108/24".parse().unwrap())
            .build()
            .unwrap()
    }

    fn settings() -> TerminalSettings {
        TerminalSettings {
            terminal_scheme: "https".to_string(),
            terminal_host: "term.example.com".to_string(),
            terminal_port: "4000".to_string(),
            ssh_port: "2222".to_string(),
        }
    }

    #[tokio::test]
    async fn should_resolve_embed_url_when_device_exists() {
        let svc = TerminalService::new(FixedRepo(vec![t1000()]), settings());
        let session = svc.resolve_embed_url(id(108)).await.unwrap();
        assert_eq!(
            session.iframe_url,
            "https://term.example.com:4000/embed/?host=10.0.0.108&port=2222&name=T1000&bep=4000"
        );
        assert_eq!(session.host_ip, "10.0.0.108");
        assert_eq!(session.device.id, id(108));
    }

    #[tokio::test]
    async fn should_return_not_found_when_device_missing() {
        let svc = TerminalService::new(FixedRepo(vec![t1000()]), settings());
        let result = svc.resolve_embed_url(id(1)).await;
        assert!(matches!(result, Err(DeviceTermError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_fall_back_to_name_when_no_address() {
        let device = Device::builder().id(id(2)).name("oob-sw1").build().unwrap();
        let svc = TerminalService::new(FixedRepo(vec![device]), TerminalSettings::default());
        let session = svc.resolve_embed_url(id(2)).await.unwrap();
        assert_eq!(session.host_ip, "oob-sw1");
        assert_eq!(
            session.iframe_url,
            "http://host.docker.internal:3000/embed/?host=oob-sw1&port=22&name=oob-sw1&bep=3000"
        );
    }

    #[tokio::test]
    async fn should_propagate_storage_error() {
        let svc = TerminalService::new(BrokenRepo, settings());
        let result = svc.resolve_embed_url(id(108)).await;
        assert!(matches!(result, Err(DeviceTermError::Storage(_))));
    }
}
