//! Metadata index: one JSON document summarizing every entry.
//!
//! The document is a single JSON array of [`IndexRecord`] at a
//! well-known path inside the data directory, fully rewritten on every
//! mutation (not an append log). Content is deliberately excluded from
//! records; it always round-trips through the content store, joined by
//! id.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entry::Entry;
use crate::error::{JournalError, Result};

/// Why the index could not be read.
///
/// Internal condition, not part of the public error taxonomy: the
/// façade reacts by falling back to a directory scan, and callers of
/// `load_all_entries` never see it.
#[derive(Debug)]
pub struct IndexUnavailable {
    pub reason: String,
}

impl fmt::Display for IndexUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Persisted projection of one entry.
///
/// Keys follow the on-disk contract (`createdDate`, `modifiedDate`,
/// camelCase); date-times are offset-less ISO-8601. Unknown keys in a
/// foreign document (a redundant `content` field, say) are ignored on
/// read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRecord {
    pub id: Uuid,
    pub title: String,
    pub created_date: NaiveDateTime,
    pub modified_date: NaiveDateTime,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub mood: Option<String>,
}

impl IndexRecord {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            created_date: entry.created_at,
            modified_date: entry.modified_at,
            tags: entry.tags.clone(),
            favorite: entry.favorite,
            mood: entry.mood.clone(),
        }
    }

    /// Rehydrates a full entry by joining the record with its content.
    pub fn into_entry(self, content: String) -> Entry {
        Entry {
            id: self.id,
            title: self.title,
            content,
            created_at: self.created_date,
            modified_at: self.modified_date,
            tags: self.tags,
            favorite: self.favorite,
            mood: self.mood,
        }
    }
}

/// The on-disk metadata index document.
#[derive(Debug, Clone)]
pub struct MetadataIndex {
    path: PathBuf,
}

impl MetadataIndex {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the index document.
    ///
    /// A missing file, an unreadable file and malformed JSON all
    /// collapse into [`IndexUnavailable`]; how to degrade is the
    /// caller's decision, never an error raised from here.
    pub fn load(&self) -> std::result::Result<Vec<IndexRecord>, IndexUnavailable> {
        let raw = fs::read_to_string(&self.path).map_err(|e| IndexUnavailable {
            reason: format!("read {}: {}", self.path.display(), e),
        })?;
        serde_json::from_str(&raw).map_err(|e| IndexUnavailable {
            reason: format!("parse {}: {}", self.path.display(), e),
        })
    }

    /// Rewrites the whole document from `records`.
    ///
    /// The write goes through a temp file and rename, so a torn write
    /// leaves the previous document intact rather than half of a new
    /// one.
    pub fn rewrite(&self, records: &[IndexRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| JournalError::WriteFailure(format!("serialize index: {}", e)))?;
        crate::fs::write_atomic(&self.path, json.as_bytes()).map_err(|e| {
            JournalError::WriteFailure(format!("write {}: {}", self.path.display(), e))
        })
    }
}
