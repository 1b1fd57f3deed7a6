//! Literary work records and their partial-update payload.

use serde::{Deserialize, Deserializer, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Record
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A single literary work.
///
/// The `id` is supplied by the caller and is not checked for uniqueness;
/// lookups always resolve to the first record carrying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteraryWork {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year_published: i64,
    pub rating: f64,
}

impl LiteraryWork {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        year_published: i64,
        rating: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year_published,
            rating,
        }
    }

    /// Merge every field present in `patch` into this record.
    pub fn apply(&mut self, patch: LiteraryWorkPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(year_published) = patch.year_published {
            self.year_published = year_published;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Partial update
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Body of an update request. Absent fields leave the record unchanged;
/// an explicit `null` is rejected since every record field is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteraryWorkPatch {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i64>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Only called for keys that appear in the body; `null` fails the inner type.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl LiteraryWorkPatch {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.author.is_none()
            && self.year_published.is_none()
            && self.rating.is_none()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
