use itertools::Itertools;
use std::{any::Any, fmt::Display};

use crate::{collection::Document, errors::DocStoreResult};

use super::{Filter, FilterProvider};

/// Logical AND over a list of filters.
///
/// Filters are evaluated in order and evaluation stops at the first one that
/// does not match. An empty list matches everything. A `SearchRequest` with
/// active fields compiles to one of these.
///
/// # Responsibilities
///
/// * **Conjunction Evaluation**: Matches documents satisfying every child filter
/// * **Short-Circuit Logic**: Skips the remaining children after the first rejection
/// * **Error Propagation**: Returns the first child error unchanged
pub(crate) struct AndFilter {
    filters: Vec<Filter>,
}

impl AndFilter {
    /// Creates a new AND filter.
    ///
    /// # Arguments
    ///
    /// * `filters` - Filters that must all accept a document, in evaluation order
    ///
    /// # Returns
    ///
    /// An `AndFilter` that accepts documents accepted by every filter
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        AndFilter { filters }
    }
}

impl Display for AndFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.filters.iter().join(" && "))
    }
}

impl FilterProvider for AndFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocStoreResult<bool> {
        for filter in &self.filters {
            if !filter.apply(entry)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn logical_filters(&self) -> Vec<Filter> {
        self.filters.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Logical OR over a list of filters, stopping at the first match.
/// An empty list matches nothing.
pub(crate) struct OrFilter {
    filters: Vec<Filter>,
}

impl OrFilter {
    /// Creates a new OR filter; `filters` are tried in order.
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        OrFilter { filters }
    }
}

impl Display for OrFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.filters.iter().join(" || "))
    }
}

impl FilterProvider for OrFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocStoreResult<bool> {
        for filter in &self.filters {
            if filter.apply(entry)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn logical_filters(&self) -> Vec<Filter> {
        self.filters.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Negation of a single filter.
///
/// Accepts exactly the documents the wrapped filter rejects. An error from
/// the wrapped filter is returned as is, never negated into a match.
pub(crate) struct NotFilter {
    filter: Filter,
}

impl NotFilter {
    pub(crate) fn new(filter: Filter) -> Self {
        NotFilter { filter }
    }
}

impl Display for NotFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(not {})", self.filter)
    }
}

impl FilterProvider for NotFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocStoreResult<bool> {
        Ok(!self.filter.apply(entry)?)
    }

    fn logical_filters(&self) -> Vec<Filter> {
        vec![self.filter.clone()]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
