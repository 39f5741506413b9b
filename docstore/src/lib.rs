//! # docstore - in-memory document repository
//!
//! `docstore` keeps text documents with metadata in memory and offers three
//! operations on them: upsert, lookup by identifier and multi-criteria
//! search.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use docstore::collection::{Author, Document};
//! use docstore::filter::SearchRequest;
//! use docstore::store::DocumentStore;
//!
//! # fn main() -> docstore::errors::DocStoreResult<()> {
//! let store = DocumentStore::new();
//!
//! let created = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
//! let doc = Document::new("Alpha Report", "quarterly results", Author::new("a1", "Ann"), created);
//! let saved = store.save(doc)?;
//! assert_eq!(saved.id.as_deref(), Some("1"));
//!
//! let request = SearchRequest::new()
//!     .title_prefixes(["Alp"])
//!     .created_from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
//!     .created_to(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap());
//! assert_eq!(store.search(&request)?, vec![saved.clone()]);
//!
//! assert!(store.search(&SearchRequest::new().author_ids(["a2"]))?.is_empty());
//! assert_eq!(store.find_by_id("1"), Some(saved));
//! assert_eq!(store.find_by_id("999"), None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - `Document` and `Author`
//! - [`errors`] - Error types and result alias
//! - [`filter`] - Predicates, their combinators and `SearchRequest`
//! - [`store`] - The `DocumentStore`, its configuration and builder
//!
//! Logging goes through the [`log`] facade; install any logger to see it.

pub mod collection;
pub mod common;
pub mod errors;
pub mod filter;
pub mod store;
