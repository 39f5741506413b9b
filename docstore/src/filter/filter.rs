use crate::collection::Document;
use crate::errors::DocStoreResult;
use std::any::Any;
use std::fmt::Display;
use std::ops::Deref;
use std::sync::Arc;

use super::{AllFilter, AndFilter, NotFilter, OrFilter};

/// Trait for implementing document predicates.
///
/// Built-in predicates are pure and only look at the document they are
/// given. `Display` is used when logging queries.
///
/// The store calls `apply` without holding any of its locks, on a snapshot
/// of the documents, so a provider may read from or write to the store it
/// is searching.
pub trait FilterProvider: Any + Send + Sync + Display {
    /// Returns `Ok(true)` if the document satisfies this predicate.
    fn apply(&self, entry: &Document) -> DocStoreResult<bool>;

    /// Child filters of a logical combinator; empty for leaf predicates.
    fn logical_filters(&self) -> Vec<Filter> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn Any;
}

/// A cloneable handle to a [`FilterProvider`].
///
/// ```rust
/// use docstore::filter::{all, author_in, Filter};
///
/// let filter: Filter = author_in(["a1"]).or(author_in(["a2"])).not();
/// assert_eq!(filter.to_string(), "(not ((author in [a1]) || (author in [a2])))");
/// assert_eq!(all().to_string(), "AllFilter");
/// ```
#[derive(Clone)]
pub struct Filter {
    inner: Arc<dyn FilterProvider>,
}

impl Filter {
    pub fn new<T: FilterProvider + 'static>(inner: T) -> Self {
        Filter { inner: Arc::new(inner) }
    }

    /// Combines this filter with another using logical AND.
    pub fn and(&self, filter: Filter) -> Self {
        Filter::new(AndFilter::new(vec![self.clone(), filter]))
    }

    /// Combines this filter with another using logical OR.
    pub fn or(&self, filter: Filter) -> Self {
        Filter::new(OrFilter::new(vec![self.clone(), filter]))
    }

    /// Negates this filter.
    pub fn not(&self) -> Self {
        Filter::new(NotFilter::new(self.clone()))
    }
}

impl Display for Filter {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Deref for Filter {
    type Target = Arc<dyn FilterProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Creates a filter that matches every document.
pub fn all() -> Filter {
    Filter::new(AllFilter)
}

/// Combines filters with logical AND, evaluated in order with short-circuit.
pub fn and(filters: Vec<Filter>) -> Filter {
    Filter::new(AndFilter::new(filters))
}

/// Combines filters with logical OR, evaluated in order with short-circuit.
pub fn or(filters: Vec<Filter>) -> Filter {
    Filter::new(OrFilter::new(filters))
}

/// Negates a filter.
pub fn not(filter: Filter) -> Filter {
    Filter::new(NotFilter::new(filter))
}

pub(crate) fn is_all_filter(filter: &Filter) -> bool {
    filter.as_any().is::<AllFilter>()
}

#[cfg(test)]
pub(crate) fn is_and_filter(filter: &Filter) -> bool {
    filter.as_any().is::<AndFilter>()
}
