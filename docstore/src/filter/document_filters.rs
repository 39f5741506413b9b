use chrono::{DateTime, SecondsFormat, Utc};
use itertools::Itertools;
use std::{any::Any, fmt::Display};

use crate::{collection::Document, errors::DocStoreResult};

use super::{Filter, FilterProvider};

fn collect_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

#[inline]
fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Matches documents whose title starts with at least one of the prefixes.
///
/// Comparison is case-sensitive and byte-exact. An empty prefix list places
/// no constraint. Created through [`title_starts_with`].
///
/// # Responsibilities
///
/// * **Prefix Matching**: Accepts a title that begins with any listed prefix
/// * **Disjunction**: Prefixes are OR'd; the first hit stops the scan
pub(crate) struct TitlePrefixFilter {
    prefixes: Vec<String>,
}

impl TitlePrefixFilter {
    /// Creates a new title prefix filter.
    ///
    /// # Arguments
    ///
    /// * `prefixes` - Accepted title prefixes; empty means no constraint
    ///
    /// # Returns
    ///
    /// A `TitlePrefixFilter` accepting titles with any of the prefixes
    pub(crate) fn new(prefixes: Vec<String>) -> Self {
        TitlePrefixFilter { prefixes }
    }
}

impl Display for TitlePrefixFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(title starts with [{}])", self.prefixes.iter().join(", "))
    }
}

impl FilterProvider for TitlePrefixFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocStoreResult<bool> {
        if self.prefixes.is_empty() {
            return Ok(true);
        }
        Ok(self
            .prefixes
            .iter()
            .any(|prefix| entry.title.starts_with(prefix.as_str())))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Matches documents whose content contains at least one of the substrings.
///
/// Case-sensitive. An empty list places no constraint. Created through
/// [`content_contains`].
///
/// # Responsibilities
///
/// * **Substring Matching**: Accepts content containing any listed substring
/// * **Disjunction**: Substrings are OR'd; the first hit stops the scan
pub(crate) struct ContentFilter {
    substrings: Vec<String>,
}

impl ContentFilter {
    pub(crate) fn new(substrings: Vec<String>) -> Self {
        ContentFilter { substrings }
    }
}

impl Display for ContentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(content contains [{}])", self.substrings.iter().join(", "))
    }
}

impl FilterProvider for ContentFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocStoreResult<bool> {
        if self.substrings.is_empty() {
            return Ok(true);
        }
        Ok(self
            .substrings
            .iter()
            .any(|needle| entry.content.contains(needle.as_str())))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Matches documents whose author id is one of the listed ids.
///
/// Only `author.id` is compared, exactly; the author name is ignored. An
/// empty list places no constraint.
pub(crate) struct AuthorFilter {
    author_ids: Vec<String>,
}

impl AuthorFilter {
    pub(crate) fn new(author_ids: Vec<String>) -> Self {
        AuthorFilter { author_ids }
    }
}

impl Display for AuthorFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(author in [{}])", self.author_ids.iter().join(", "))
    }
}

impl FilterProvider for AuthorFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocStoreResult<bool> {
        if self.author_ids.is_empty() {
            return Ok(true);
        }
        Ok(self.author_ids.iter().any(|id| *id == entry.author.id))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Inclusive lower bound on the creation timestamp.
///
/// Instants are compared in their total order, so sub-second differences
/// count. A document created exactly at the bound matches.
pub(crate) struct CreatedFromFilter {
    from: DateTime<Utc>,
}

impl CreatedFromFilter {
    /// Creates a new lower-bound filter.
    ///
    /// # Arguments
    ///
    /// * `from` - Earliest accepted creation instant, inclusive
    pub(crate) fn new(from: DateTime<Utc>) -> Self {
        CreatedFromFilter { from }
    }
}

impl Display for CreatedFromFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(created >= {})", format_instant(&self.from))
    }
}

impl FilterProvider for CreatedFromFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocStoreResult<bool> {
        Ok(entry.created >= self.from)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Inclusive upper bound on the creation timestamp. See [`CreatedFromFilter`].
pub(crate) struct CreatedToFilter {
    to: DateTime<Utc>,
}

impl CreatedToFilter {
    pub(crate) fn new(to: DateTime<Utc>) -> Self {
        CreatedToFilter { to }
    }
}

impl Display for CreatedToFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(created <= {})", format_instant(&self.to))
    }
}

impl FilterProvider for CreatedToFilter {
    #[inline]
    fn apply(&self, entry: &Document) -> DocStoreResult<bool> {
        Ok(entry.created <= self.to)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Creates a filter matching titles that start with any of `prefixes`.
///
/// # Arguments
///
/// * `prefixes` - Case-sensitive prefixes; an empty list matches every document
///
/// # Examples
///
/// ```rust
/// use docstore::filter::title_starts_with;
///
/// let filter = title_starts_with(["Al", "Bo"]);
/// assert_eq!(filter.to_string(), "(title starts with [Al, Bo])");
/// ```
pub fn title_starts_with<I, S>(prefixes: I) -> Filter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Filter::new(TitlePrefixFilter::new(collect_strings(prefixes)))
}

/// Creates a filter matching content that contains any of `substrings`.
pub fn content_contains<I, S>(substrings: I) -> Filter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Filter::new(ContentFilter::new(collect_strings(substrings)))
}

/// Creates a filter matching documents written by any of `author_ids`.
pub fn author_in<I, S>(author_ids: I) -> Filter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Filter::new(AuthorFilter::new(collect_strings(author_ids)))
}

/// Creates a filter matching documents created at or after `from`.
pub fn created_from(from: DateTime<Utc>) -> Filter {
    Filter::new(CreatedFromFilter::new(from))
}

/// Creates a filter matching documents created at or before `to`.
pub fn created_to(to: DateTime<Utc>) -> Filter {
    Filter::new(CreatedToFilter::new(to))
}
