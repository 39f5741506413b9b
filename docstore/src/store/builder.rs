use crate::errors::{DocStoreError, DocStoreResult};

use super::{DocumentStore, StoreConfig};

/// Builder for a [`DocumentStore`].
///
/// The first configuration error is captured and returned from
/// [`open`](StoreBuilder::open); later calls are ignored once an error is
/// recorded.
///
/// ```rust
/// use docstore::store::StoreBuilder;
///
/// # fn main() -> docstore::errors::DocStoreResult<()> {
/// let store = StoreBuilder::new().name("reports").initial_id(1000).open()?;
/// assert_eq!(store.config().initial_id(), 1000);
///
/// assert!(StoreBuilder::new().initial_id(0).open().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct StoreBuilder {
    error: Option<DocStoreError>,
    store_config: StoreConfig,
}

impl StoreBuilder {
    pub fn new() -> Self {
        StoreBuilder {
            error: None,
            store_config: StoreConfig::new(),
        }
    }

    /// Sets the first identifier the store assigns. Must be positive.
    pub fn initial_id(mut self, initial_id: u64) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.store_config.set_initial_id(initial_id) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Sets the name the store uses in log output.
    pub fn name(mut self, name: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.store_config.set_name(name) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Opens an empty store with the configured settings.
    pub fn open(self) -> DocStoreResult<DocumentStore> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(DocumentStore::with_config(self.store_config))
    }
}
