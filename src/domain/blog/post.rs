//! The blog post record.

use serde::{Deserialize, Serialize};

/// One blog entry as fetched from the document store.
///
/// The store does not enforce a schema, so every field the aggregation
/// engine reads is optional at the type level and validated per
/// operation. Fields the engine never reads (`id`, `title`, `url`) are
/// carried through opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identifier, if the record has been persisted.
    /// The document store emits this as `_id`.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Author display name. Not unique across posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Non-negative like count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
}

impl Post {
    /// Creates a well-formed post with the fields the aggregation
    /// engine needs. Convenience for tests and in-memory callers.
    pub fn new(author: impl Into<String>, likes: u64) -> Self {
        Self {
            author: Some(author.into()),
            likes: Some(likes),
            ..Self::default()
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
