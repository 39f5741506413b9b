use indexmap::IndexMap;
use log::{debug, info};
use std::sync::Arc;

use crate::collection::id_generator::SequentialIdGenerator;
use crate::collection::Document;
use crate::common::{atomic, Atomic, ReadExecutor, WriteExecutor};
use crate::errors::{DocStoreError, DocStoreResult, ErrorKind};
use crate::filter::{is_all_filter, Filter, SearchRequest};

use super::{StoreBuilder, StoreConfig};

/// In-memory repository of documents.
///
/// Documents are kept in insertion order and keyed by identifier, so at most
/// one document exists per identifier. Search is a linear scan.
///
/// # Concurrency
///
/// The handle is cheap to clone and every clone sees the same documents.
/// State lives behind a single read-write lock: [`save`](Self::save) holds
/// the write lock for identifier assignment and replacement together, and
/// every read copies what it needs under the read lock, so readers never see
/// a half-applied save.
///
/// [`find`](Self::find) and [`search`](Self::search) evaluate their filter
/// on a snapshot taken under the read lock, after the lock is released. A
/// custom [`FilterProvider`](crate::filter::FilterProvider) may therefore
/// call back into the store, including `save`, without deadlocking; such
/// writes are not visible to the scan in progress.
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<DocumentStoreInner>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Opens an empty store with default settings.
    pub fn new() -> Self {
        DocumentStore::with_config(StoreConfig::new())
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub(crate) fn with_config(config: StoreConfig) -> Self {
        config.initialize();
        info!(
            "Opened document store '{}' starting at id {}",
            config.name(),
            config.initial_id()
        );
        DocumentStore {
            inner: Arc::new(DocumentStoreInner::new(config)),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Inserts or replaces a document.
    ///
    /// A document without an identifier (or with an empty one) gets the next
    /// counter value and is appended. A document with an identifier replaces
    /// the stored document with that identifier, if any, and moves to the end
    /// of the insertion order. `created` is never modified.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` only when the identifier counter is exhausted.
    pub fn save(&self, document: Document) -> DocStoreResult<Document> {
        self.inner.save(document)
    }

    /// Returns the document with exactly this identifier.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        self.inner.find_by_id(id)
    }

    /// Returns, in insertion order, every document matching `request`.
    ///
    /// A request without active fields returns every document.
    pub fn search(&self, request: &SearchRequest) -> DocStoreResult<Vec<Document>> {
        self.find(request.to_filter())
    }

    /// Returns, in insertion order, every document accepted by `filter`.
    ///
    /// # Errors
    ///
    /// Stops at the first document the filter fails to evaluate and returns a
    /// `FilterError` wrapping the cause.
    pub fn find(&self, filter: Filter) -> DocStoreResult<Vec<Document>> {
        self.inner.find(filter)
    }

    /// Returns every document in insertion order.
    pub fn find_all(&self) -> Vec<Document> {
        self.inner.find_all()
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

struct StoreState {
    documents: IndexMap<String, Document>,
    id_generator: SequentialIdGenerator,
}

impl StoreState {
    /// Next counter value not already taken by a caller-supplied identifier.
    fn next_free_id(&mut self) -> DocStoreResult<String> {
        loop {
            let id = self.id_generator.next_id()?;
            if !self.documents.contains_key(&id) {
                return Ok(id);
            }
            debug!("Skipping id {} already used by a stored document", id);
        }
    }
}

struct DocumentStoreInner {
    config: StoreConfig,
    state: Atomic<StoreState>,
}

impl DocumentStoreInner {
    fn new(config: StoreConfig) -> Self {
        let id_generator = SequentialIdGenerator::new(config.initial_id());
        DocumentStoreInner {
            config,
            state: atomic(StoreState {
                documents: IndexMap::new(),
                id_generator,
            }),
        }
    }

    fn save(&self, mut document: Document) -> DocStoreResult<Document> {
        let store_name = self.config.name();
        self.state.write_with(move |state| {
            let id = match document.id().map(str::to_owned) {
                Some(id) => id,
                None => {
                    let id = state.next_free_id().map_err(|e| {
                        DocStoreError::new_with_cause(
                            &format!("Failed to assign an id in store '{}'", store_name),
                            ErrorKind::InvalidId,
                            e,
                        )
                    })?;
                    debug!("Assigned id {} in store '{}'", id, store_name);
                    document.id = Some(id.clone());
                    id
                }
            };

            if state.documents.shift_remove(&id).is_some() {
                debug!("Replaced document {} in store '{}'", id, store_name);
            }
            state.documents.insert(id, document.clone());
            Ok(document)
        })
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        self.state.read_with(|state| state.documents.get(id).cloned())
    }

    fn find(&self, filter: Filter) -> DocStoreResult<Vec<Document>> {
        debug!("Searching store '{}' with {}", self.config.name(), filter);
        // the snapshot is taken under the read lock; filters run without it
        let snapshot = self.find_all();
        if is_all_filter(&filter) {
            return Ok(snapshot);
        }

        let mut matched = Vec::new();
        for document in snapshot {
            let accepted = filter.apply(&document).map_err(|e| {
                log::error!("Filter {} failed on {}: {}", filter, document, e);
                DocStoreError::new_with_cause(
                    &format!("Failed to apply filter {}", filter),
                    ErrorKind::FilterError,
                    e,
                )
            })?;
            if accepted {
                matched.push(document);
            }
        }
        Ok(matched)
    }

    fn find_all(&self) -> Vec<Document> {
        self.state
            .read_with(|state| state.documents.values().cloned().collect())
    }

    fn size(&self) -> usize {
        self.state.read_with(|state| state.documents.len())
    }
}
