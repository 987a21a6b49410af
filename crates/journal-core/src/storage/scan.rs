//! Directory-scan fallback for a missing or unreadable index.
//!
//! Rebuilds entry summaries straight from the content directory. Tags,
//! favorite and mood do not survive without the index; scanned entries
//! carry defaults for them. Results are ordered lexicographically by
//! filename, so a fixed directory snapshot always scans the same way.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDateTime};
use log::warn;

use crate::entry::Entry;
use crate::storage::content::derived_id;

/// Display cap for titles recovered from a first content line.
const MAX_TITLE_CHARS: usize = 80;

/// Length of the `YYYY-MM-DD_HHMMSS` filename prefix.
const TIMESTAMP_PREFIX_LEN: usize = 17;

/// Scans every file in `dir` and derives a summary entry per file.
///
/// Ids are stable across repeated scans: each is the UUID v5 of the
/// filename, for conforming and non-conforming names alike. Unreadable
/// files are skipped; the scan is best-effort recovery, not a place to
/// fail from.
pub fn scan_entries(dir: &Path) -> Vec<Entry> {
    let Ok(read) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut paths: Vec<_> = read
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut entries = Vec::new();
    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("scan skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };
        let timestamp = parse_name_timestamp(name)
            .or_else(|| file_mtime(&path))
            .unwrap_or_else(|| Local::now().naive_local());
        entries.push(Entry {
            id: derived_id(name),
            title: first_line_title(&content),
            content,
            created_at: timestamp,
            modified_at: timestamp,
            tags: Vec::new(),
            favorite: false,
            mood: None,
        });
    }
    entries
}

/// Parses the `YYYY-MM-DD_HHMMSS` prefix of a generated filename.
fn parse_name_timestamp(name: &str) -> Option<NaiveDateTime> {
    let prefix = name.get(..TIMESTAMP_PREFIX_LEN)?;
    NaiveDateTime::parse_from_str(prefix, "%Y-%m-%d_%H%M%S").ok()
}

fn file_mtime(path: &Path) -> Option<NaiveDateTime> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Local>::from(modified).naive_local())
}

/// First line of the body, truncated to a display length.
fn first_line_title(content: &str) -> String {
    let line = content.lines().next().unwrap_or("");
    line.chars().take(MAX_TITLE_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_parse_name_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(
            parse_name_timestamp("2024-01-15_103000_entry1.txt"),
            Some(expected)
        );
        assert_eq!(parse_name_timestamp("notes.txt"), None);
        assert_eq!(parse_name_timestamp("x"), None);
    }

    #[test]
    fn test_first_line_title_truncates() {
        assert_eq!(first_line_title("short\nrest"), "short");
        assert_eq!(first_line_title(""), "");
        let long = "x".repeat(300);
        assert_eq!(first_line_title(&long).chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_scan_is_deterministic_and_ordered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "Second file\nbody").unwrap();
        fs::write(dir.path().join("a.txt"), "First file\nbody").unwrap();

        let first = scan_entries(dir.path());
        let second = scan_entries(dir.path());

        assert_eq!(first.len(), 2);
        assert_eq!(first[0].title, "First file");
        assert_eq!(first[1].title, "Second file");
        // Same snapshot, same ids, both passes.
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[1].id, second[1].id);
    }

    #[test]
    fn test_scan_takes_timestamp_from_conforming_name() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("2024-01-16_144500_entry2.txt"),
            "First line of entry 2\nSecond line",
        )
        .unwrap();

        let entries = scan_entries(dir.path());
        assert_eq!(entries.len(), 1);
        let expected = NaiveDate::from_ymd_opt(2024, 1, 16)
            .unwrap()
            .and_hms_opt(14, 45, 0)
            .unwrap();
        assert_eq!(entries[0].created_at, expected);
        assert_eq!(entries[0].modified_at, expected);
        assert!(entries[0].tags.is_empty());
        assert!(!entries[0].favorite);
        assert!(entries[0].mood.is_none());
    }

    #[test]
    fn test_scan_missing_dir_yields_empty() {
        assert!(scan_entries(Path::new("/nonexistent/journal/entries")).is_empty());
    }
}
