use chrono::{DateTime, Utc};

use crate::collection::Document;

use super::{
    all, and, author_in, content_contains, created_from, created_to, title_starts_with, Filter,
};

/// Multi-criteria search over documents.
///
/// Every field is optional. A field that is `None`, or a list that is empty,
/// places no constraint on its dimension. Active fields are combined with
/// logical AND; within a list, any single entry is enough to match.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use docstore::filter::SearchRequest;
///
/// let request = SearchRequest::new()
///     .title_prefixes(["Alp"])
///     .created_from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
///     .created_to(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap());
/// assert!(!request.is_empty());
/// assert!(SearchRequest::default().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRequest {
    pub title_prefixes: Option<Vec<String>>,
    pub contains_contents: Option<Vec<String>>,
    pub author_ids: Option<Vec<String>>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

#[inline]
fn active(values: &Option<Vec<String>>) -> Option<&Vec<String>> {
    values.as_ref().filter(|v| !v.is_empty())
}

fn to_vec<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl SearchRequest {
    /// Creates a request without constraints; it matches every document.
    pub fn new() -> Self {
        SearchRequest::default()
    }

    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_prefixes = Some(to_vec(prefixes));
        self
    }

    pub fn contains_contents<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contains_contents = Some(to_vec(substrings));
        self
    }

    pub fn author_ids<I, S>(mut self, author_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.author_ids = Some(to_vec(author_ids));
        self
    }

    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.created_from = Some(from);
        self
    }

    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.created_to = Some(to);
        self
    }

    /// Returns `true` when no field places a constraint.
    pub fn is_empty(&self) -> bool {
        active(&self.title_prefixes).is_none()
            && active(&self.contains_contents).is_none()
            && active(&self.author_ids).is_none()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }

    /// Compiles the active fields into a single filter.
    ///
    /// Returns `all()` when nothing is active, otherwise an AND of the active
    /// predicates in field order: title, content, author, from, to.
    pub fn to_filter(&self) -> Filter {
        let mut filters = Vec::with_capacity(5);
        if let Some(prefixes) = active(&self.title_prefixes) {
            filters.push(title_starts_with(prefixes.iter().cloned()));
        }
        if let Some(substrings) = active(&self.contains_contents) {
            filters.push(content_contains(substrings.iter().cloned()));
        }
        if let Some(author_ids) = active(&self.author_ids) {
            filters.push(author_in(author_ids.iter().cloned()));
        }
        if let Some(from) = self.created_from {
            filters.push(created_from(from));
        }
        if let Some(to) = self.created_to {
            filters.push(created_to(to));
        }

        if filters.is_empty() {
            all()
        } else {
            and(filters)
        }
    }

    /// Decides whether `document` satisfies every active field.
    pub fn matches(&self, document: &Document) -> bool {
        matches(document, self)
    }
}

/// Decides whether `document` satisfies every active field of `request`.
///
/// The built-in predicates are infallible; should evaluation ever report an
/// error the document is treated as non-matching.
pub fn matches(document: &Document, request: &SearchRequest) -> bool {
    let filter = request.to_filter();
    filter.apply(document).unwrap_or_else(|err| {
        log::error!("Failed to evaluate {} on {}: {}", filter, document, err);
        false
    })
}
