//! The journal entry model.

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

/// One journal record.
///
/// Pure data holder: no validation happens here (empty titles and
/// content are permitted; validation, if any, is the caller's
/// responsibility). Timestamps are naive local date-times because the
/// persisted contract is offset-less ISO-8601.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Stable identifier, assigned once at creation and never reused
    pub id: Uuid,

    pub title: String,

    pub content: String,

    /// Set once at construction
    pub created_at: NaiveDateTime,

    /// Bumped by every mutator
    pub modified_at: NaiveDateTime,

    /// Ordered; duplicates are preserved, not deduplicated
    pub tags: Vec<String>,

    pub favorite: bool,

    /// Free-form mood marker, optional
    pub mood: Option<String>,
}

impl Entry {
    /// Creates a fresh entry with both timestamps set to now.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Local::now().naive_local();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            modified_at: now,
            tags: Vec::new(),
            favorite: false,
            mood: None,
        }
    }

    /// Appends a tag unconditionally; no uniqueness check is made.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
        self.touch();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    pub fn set_mood(&mut self, mood: impl Into<String>) {
        self.mood = Some(mood.into());
        self.touch();
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
        self.touch();
    }

    /// Overrides both timestamps directly.
    ///
    /// Escape hatch for tests and migrations: out-of-order and future
    /// dates are accepted as-is, the engine never rejects them.
    pub fn set_dates(&mut self, created_at: NaiveDateTime, modified_at: NaiveDateTime) {
        self.created_at = created_at;
        self.modified_at = modified_at;
    }

    fn touch(&mut self) {
        self.modified_at = Local::now().naive_local();
    }
}
