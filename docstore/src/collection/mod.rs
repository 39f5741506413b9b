//! Documents and the values embedded in them.
//!
//! A [`Document`] is a plain record: an optional identifier, a title, a
//! content body, an embedded [`Author`] and a UTC creation timestamp. The
//! identifier stays `None` until the store assigns one.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use docstore::collection::{Author, Document};
//!
//! let created = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
//! let doc = Document::new("Alpha Report", "quarterly results", Author::new("a1", "Ann"), created);
//! assert!(!doc.has_id());
//! ```

mod document;
pub(crate) mod id_generator;

pub use document::*;
