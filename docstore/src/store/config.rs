use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::common::{atomic, Atomic, ReadExecutor, WriteExecutor};
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};

/// First identifier handed out by a store with default settings.
pub const DEFAULT_INITIAL_ID: u64 = 1;

/// Name used in log output when none is configured.
pub const DEFAULT_STORE_NAME: &str = "documents";

/// Configuration for a [`DocumentStore`](super::DocumentStore).
///
/// Cloning shares the same settings. Once a store has been opened with a
/// configuration it is frozen and every setter returns an error.
#[derive(Clone)]
pub struct StoreConfig {
    inner: Arc<StoreConfigInner>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        StoreConfig {
            inner: Arc::new(StoreConfigInner::new()),
        }
    }

    /// The value the store's identifier counter starts from.
    pub fn initial_id(&self) -> u64 {
        self.inner.initial_id.load(Ordering::Relaxed)
    }

    /// Sets the first identifier to assign.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `initial_id` is zero or the
    /// configuration is already in use.
    pub fn set_initial_id(&self, initial_id: u64) -> DocStoreResult<()> {
        self.inner.set_initial_id(initial_id)
    }

    pub fn name(&self) -> String {
        self.inner.name.read_with(|name| name.clone())
    }

    /// Sets the store name used in log output.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `name` is blank or the configuration
    /// is already in use.
    pub fn set_name(&self, name: &str) -> DocStoreResult<()> {
        self.inner.set_name(name)
    }

    pub fn is_configured(&self) -> bool {
        self.inner.configured.load(Ordering::Relaxed)
    }

    pub(crate) fn initialize(&self) {
        self.inner.configured.store(true, Ordering::Relaxed);
    }
}

struct StoreConfigInner {
    configured: AtomicBool,
    initial_id: AtomicU64,
    name: Atomic<String>,
}

impl StoreConfigInner {
    fn new() -> Self {
        StoreConfigInner {
            configured: AtomicBool::new(false),
            initial_id: AtomicU64::new(DEFAULT_INITIAL_ID),
            name: atomic(DEFAULT_STORE_NAME.to_string()),
        }
    }

    fn ensure_not_configured(&self, setting: &str) -> DocStoreResult<()> {
        if self.configured.load(Ordering::Relaxed) {
            log::error!("{} cannot be changed after the store is opened", setting);
            return Err(DocStoreError::new(
                &format!("{} cannot be changed after the store is opened", setting),
                ErrorKind::InvalidConfiguration,
            ));
        }
        Ok(())
    }

    fn set_initial_id(&self, initial_id: u64) -> DocStoreResult<()> {
        self.ensure_not_configured("Initial id")?;
        if initial_id == 0 {
            log::error!("Initial id must be greater than zero");
            return Err(DocStoreError::new(
                "Initial id must be greater than zero",
                ErrorKind::InvalidConfiguration,
            ));
        }
        self.initial_id.store(initial_id, Ordering::Relaxed);
        Ok(())
    }

    fn set_name(&self, name: &str) -> DocStoreResult<()> {
        self.ensure_not_configured("Store name")?;
        if name.trim().is_empty() {
            log::error!("Store name cannot be empty");
            return Err(DocStoreError::new(
                "Store name cannot be empty",
                ErrorKind::InvalidConfiguration,
            ));
        }
        self.name.write_with(|it| *it = name.to_string());
        Ok(())
    }
}
