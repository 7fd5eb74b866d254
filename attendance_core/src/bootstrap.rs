use crate::config::AppConfig;
use crate::error::BootError;

/// The page the application boots into.
pub trait Host {
    type MountPoint;

    fn find_mount_point(&self, id: &str) -> Option<Self::MountPoint>;

    /// Builds the root view and attaches it under `mount`.
    ///
    /// # Errors
    ///
    /// Returns [`BootError::Host`] when the mount point cannot hold the view.
    fn attach(&mut self, mount: Self::MountPoint) -> Result<(), BootError>;

    /// Starts unregistering offline update workers without waiting for it.
    fn start_update_worker_unregistration(&mut self);
}

/// One-shot mount sequence. `run` consumes the bootstrapper so the sequence
/// cannot be replayed against the same page.
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    mount_id: String,
}

impl Bootstrapper {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            mount_id: config.mount_id.clone(),
        }
    }

    #[must_use]
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// # Errors
    ///
    /// Returns [`BootError::MissingMountPoint`] if the host has no element with
    /// the configured id, or whatever [`Host::attach`] fails with. Update
    /// workers are left alone when mounting fails.
    pub fn run<H: Host + ?Sized>(self, host: &mut H) -> Result<(), BootError> {
        log::info!("bootstrapping into #{}", self.mount_id);

        let mount = host
            .find_mount_point(&self.mount_id)
            .ok_or_else(|| BootError::MissingMountPoint {
                id: self.mount_id.clone(),
            })?;
        host.attach(mount)?;
        log::debug!("root view attached to #{}", self.mount_id);

        host.start_update_worker_unregistration();
        Ok(())
    }
}
