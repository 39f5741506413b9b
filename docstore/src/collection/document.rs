use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};

/// The author of a [`Document`].
///
/// Authors have no lifecycle of their own; they are embedded by value in
/// every document that references them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Author {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A text record with metadata.
///
/// `id` is `None` for documents that were never saved. Once the store has
/// assigned an identifier it is never changed, and `created` is always kept
/// exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl Document {
    /// Creates an unsaved document without an identifier.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: DateTime<Utc>,
    ) -> Self {
        Document {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created,
        }
    }

    /// Returns a copy of this document carrying `id`.
    ///
    /// Saving the result replaces any stored document with the same identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the identifier, treating an empty string as unset.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    #[inline]
    pub fn has_id(&self) -> bool {
        self.id().is_some()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Document {{ id: {}, title: {:?}, author: {}, created: {} }}",
            self.id().unwrap_or("<unset>"),
            self.title,
            self.author.id,
            self.created.to_rfc3339(),
        )
    }
}
