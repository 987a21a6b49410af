//! Content store: one text file per entry.
//!
//! Pure key→file mapping, no indexing logic. Filenames are a pure
//! function of the entry (`YYYY-MM-DD_HHMMSS_<sanitized-title>_<id8>.txt`),
//! so save, update and delete can all re-derive them without any side
//! channel. The embedded id prefix makes two entries created in the
//! same second with the same title name different files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::debug;
use uuid::Uuid;

use crate::entry::Entry;
use crate::error::{JournalError, Result};

/// Cap on the sanitized-title portion of a filename.
const MAX_TITLE_CHARS: usize = 60;

/// Maps entries to content files inside a single flat directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    dir: PathBuf,
}

impl ContentStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The content directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Derives the content file path for an entry from its creation
    /// timestamp, current title and id.
    pub fn path_for(&self, entry: &Entry) -> PathBuf {
        self.dir
            .join(file_name(entry.created_at, &entry.title, &entry.id))
    }

    /// Finds the existing content file for `id`, whatever title the
    /// name was derived from when it was written.
    ///
    /// Generated names carry the id's first 8 hex digits as a suffix;
    /// files recovered by a directory scan carry an id derived from
    /// the whole filename instead, so that is checked second.
    pub fn find_by_id(&self, id: &Uuid) -> Option<PathBuf> {
        let suffix = format!("_{}.txt", id_prefix(id));
        let names = self.sorted_file_names();
        names
            .iter()
            .find(|name| name.ends_with(&suffix))
            .or_else(|| names.iter().find(|name| derived_id(name) == *id))
            .map(|name| self.dir.join(name))
    }

    /// Writes the entry's content, creating the directory if needed.
    pub fn write(&self, entry: &Entry) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            JournalError::WriteFailure(format!("create {}: {}", self.dir.display(), e))
        })?;
        let path = self.path_for(entry);
        fs::write(&path, &entry.content).map_err(|e| {
            JournalError::WriteFailure(format!("write {}: {}", path.display(), e))
        })?;
        debug!("wrote content file {}", path.display());
        Ok(path)
    }

    /// Reads the content for `id`, or `None` when no file exists.
    pub fn read_by_id(&self, id: &Uuid) -> Option<String> {
        let path = self.find_by_id(id)?;
        fs::read_to_string(path).ok()
    }

    /// Removes the content file for `id`; reports whether one existed.
    pub fn remove_by_id(&self, id: &Uuid) -> Result<bool> {
        match self.find_by_id(id) {
            Some(path) => {
                fs::remove_file(&path).map_err(|e| {
                    JournalError::WriteFailure(format!("remove {}: {}", path.display(), e))
                })?;
                debug!("removed content file {}", path.display());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn sorted_file_names(&self) -> Vec<String> {
        let Ok(read) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = read
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}

/// First 8 hex digits of the id, as embedded in generated filenames.
pub(crate) fn id_prefix(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

/// Stable identity for an arbitrary content filename.
///
/// Derived from the name rather than the file body, so rewriting a
/// file's content does not change its scanned identity.
pub(crate) fn derived_id(file_name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, file_name.as_bytes())
}

/// `YYYY-MM-DD_HHMMSS_<sanitized-title>_<id8>.txt`
pub(crate) fn file_name(created_at: NaiveDateTime, title: &str, id: &Uuid) -> String {
    format!(
        "{}_{}_{}.txt",
        created_at.format("%Y-%m-%d_%H%M%S"),
        sanitize_title(title),
        id_prefix(id),
    )
}

/// Lower-cases the title and maps every character outside `[a-z0-9]`
/// to an underscore, collapsing runs and trimming both ends. An empty
/// result becomes `untitled`.
pub(crate) fn sanitize_title(title: &str) -> String {
    let mut out = String::new();
    let mut pending_sep = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if !c.is_ascii_alphanumeric() {
            pending_sep = true;
            continue;
        }
        let needed = if pending_sep && !out.is_empty() { 2 } else { 1 };
        if out.len() + needed > MAX_TITLE_CHARS {
            break;
        }
        if pending_sep && !out.is_empty() {
            out.push('_');
        }
        out.push(c);
        pending_sep = false;
    }
    if out.is_empty() {
        "untitled".to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("Test Entry Title"), "test_entry_title");
        assert_eq!(sanitize_title("  Spaced  out  "), "spaced_out");
        assert_eq!(sanitize_title("Chars: & < > \" '"), "chars");
        assert_eq!(sanitize_title("café"), "caf");
        assert_eq!(sanitize_title("!!!"), "untitled");
        assert_eq!(sanitize_title(""), "untitled");
    }

    #[test]
    fn test_sanitize_title_is_capped() {
        let long = "a".repeat(500);
        assert_eq!(sanitize_title(&long).len(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_file_name_shape() {
        let id = Uuid::new_v4();
        let name = file_name(ts(), "Test Entry Title", &id);
        assert!(name.starts_with("2024-01-15_103000_test_entry_title_"));
        assert!(name.ends_with(".txt"));
        assert!(name.contains(&id_prefix(&id)));
    }

    #[test]
    fn test_same_second_same_title_distinct_names() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_ne!(file_name(ts(), "Walk", &a), file_name(ts(), "Walk", &b));
    }

    #[test]
    fn test_write_find_remove_round_trip() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().to_path_buf());
        let entry = Entry::new("Round Trip", "body text");

        let path = store.write(&entry).unwrap();
        assert_eq!(store.find_by_id(&entry.id), Some(path));
        assert_eq!(store.read_by_id(&entry.id).as_deref(), Some("body text"));

        assert!(store.remove_by_id(&entry.id).unwrap());
        assert!(!store.remove_by_id(&entry.id).unwrap());
        assert!(store.read_by_id(&entry.id).is_none());
    }

    #[test]
    fn test_find_by_derived_id_for_foreign_names() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().to_path_buf());
        fs::write(dir.path().join("2024-01-15_103000_entry1.txt"), "legacy").unwrap();

        let id = derived_id("2024-01-15_103000_entry1.txt");
        assert_eq!(store.read_by_id(&id).as_deref(), Some("legacy"));
    }
}
