//! The in-memory document store.
//!
//! A [`DocumentStore`] is an owned handle: create it once (directly or
//! through [`StoreBuilder`]) and clone it to share the same documents between
//! callers or threads. All mutation goes through
//! [`save`](DocumentStore::save).
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use docstore::collection::{Author, Document};
//! use docstore::filter::SearchRequest;
//! use docstore::store::DocumentStore;
//!
//! # fn main() -> docstore::errors::DocStoreResult<()> {
//! let store = DocumentStore::new();
//! let created = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
//! let saved = store.save(Document::new("Alpha Report", "quarterly results", Author::new("a1", "Ann"), created))?;
//! assert_eq!(saved.id.as_deref(), Some("1"));
//!
//! let found = store.search(&SearchRequest::new().title_prefixes(["Alp"]))?;
//! assert_eq!(found, vec![saved]);
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod document_store;

pub use builder::*;
pub use config::*;
pub use document_store::*;
