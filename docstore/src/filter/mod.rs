//! Predicates for selecting documents.
//!
//! Every predicate implements [`FilterProvider`] and is handled through the
//! cloneable [`Filter`] wrapper. Filters compose with `and`, `or` and `not`.
//! A [`SearchRequest`] compiles to the conjunction of its active predicates.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use docstore::filter::{author_in, created_from, title_starts_with, SearchRequest};
//!
//! // built by hand
//! let filter = title_starts_with(["Al", "Bo"])
//!     .and(author_in(["a1"]))
//!     .and(created_from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
//!
//! // or from a request
//! let request = SearchRequest::new().title_prefixes(["Al", "Bo"]).author_ids(["a1"]);
//! let compiled = request.to_filter();
//! # let _ = (filter, compiled);
//! ```

mod basic_filters;
mod document_filters;
mod filter;
mod logical_filters;
mod search_request;

pub(crate) use basic_filters::*;
pub use document_filters::*;
pub use filter::*;
pub(crate) use logical_filters::*;
pub use search_request::*;
