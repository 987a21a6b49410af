//! The persistence façade coordinating content files and the index.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::entry::Entry;
use crate::error::{JournalError, Result};
use crate::export::ExportTask;
use crate::storage::content::{derived_id, ContentStore};
use crate::storage::index::{IndexRecord, MetadataIndex};
use crate::storage::scan;

/// Name of the index document inside the data directory.
pub const INDEX_FILE_NAME: &str = "metadata.json";

/// Name of the content directory inside the data directory.
pub const ENTRIES_DIR_NAME: &str = "entries";

/// File-backed persistence for journal entries.
///
/// Writes go through the content store and keep the metadata index in
/// sync; reads prefer the index and degrade to a directory scan when
/// it is missing or unreadable. All operations are synchronous and run
/// on the caller's thread. One instance assumes single-writer access
/// to its data directory; callers serialize their own calls into it.
pub struct FileStore {
    data_dir: PathBuf,
    content: ContentStore,
    index: MetadataIndex,
}

impl FileStore {
    /// Opens a store rooted at `data_dir`, creating the directory
    /// hierarchy on first use.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailure` if the hierarchy cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let entries_dir = data_dir.join(ENTRIES_DIR_NAME);
        fs::create_dir_all(&entries_dir).map_err(|e| {
            JournalError::WriteFailure(format!("create {}: {}", entries_dir.display(), e))
        })?;
        Ok(Self {
            content: ContentStore::new(entries_dir),
            index: MetadataIndex::new(data_dir.join(INDEX_FILE_NAME)),
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Persists an entry: content file first, then the rewritten index
    /// (record replaced by id, or appended).
    ///
    /// The two writes are not transactional; a crash between them
    /// leaves state the scan fallback can still recover.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailure` if either write fails.
    pub fn save_entry(&self, entry: &Entry) -> Result<()> {
        // Record set is taken before the write so a re-seeding scan
        // cannot pick up the file this save is about to create.
        let mut records = self.known_records(entry);
        self.content.write(entry)?;
        upsert(&mut records, IndexRecord::from_entry(entry));
        self.index.rewrite(&records)
    }

    /// Overwrites an existing entry's content and refreshes its index
    /// record, matched by id.
    ///
    /// The content filename embeds the title, so a title change
    /// renames the file; identity is carried by the id suffix, not the
    /// name. The stale file is removed best-effort once the new one is
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the entry has neither a content file
    /// nor an index record, `WriteFailure` if a write fails.
    pub fn update_entry(&self, entry: &Entry) -> Result<()> {
        let existing = self.content.find_by_id(&entry.id);
        let mut records = self.known_records(entry);
        if existing.is_none() && !records.iter().any(|r| r.id == entry.id) {
            return Err(JournalError::NotFound(format!(
                "entry {} has no content file or index record",
                entry.id
            )));
        }

        let target = self.content.write(entry)?;
        if let Some(old) = existing {
            if old != target {
                if let Err(e) = fs::remove_file(&old) {
                    warn!("leaving stale content file {}: {}", old.display(), e);
                }
            }
        }
        upsert(&mut records, IndexRecord::from_entry(entry));
        self.index.rewrite(&records)
    }

    /// Removes the entry's content file and index record.
    ///
    /// Best-effort cleanup: succeeds when either existed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` only when both were already gone.
    pub fn delete_entry(&self, entry: &Entry) -> Result<()> {
        let removed_file = self.content.remove_by_id(&entry.id)?;

        let mut removed_record = false;
        if let Ok(mut records) = self.index.load() {
            let before = records.len();
            records.retain(|r| r.id != entry.id);
            if records.len() != before {
                self.index.rewrite(&records)?;
                removed_record = true;
            }
        }

        if removed_file || removed_record {
            Ok(())
        } else {
            Err(JournalError::NotFound(format!(
                "entry {} has no content file or index record",
                entry.id
            )))
        }
    }

    /// Loads every known entry.
    ///
    /// Prefers the metadata index, joining each record with its
    /// content file by id (a record whose file has gone missing is
    /// kept with empty content). When the index is unavailable the
    /// directory scan takes over; that is the expected degraded path,
    /// never an error.
    pub fn load_all_entries(&self) -> Vec<Entry> {
        match self.index.load() {
            Ok(records) => records
                .into_iter()
                .map(|record| {
                    let content = self.content.read_by_id(&record.id).unwrap_or_default();
                    record.into_entry(content)
                })
                .collect(),
            Err(unavailable) => {
                warn!(
                    "metadata index unavailable ({}); falling back to directory scan",
                    unavailable
                );
                scan::scan_entries(self.content.dir())
            }
        }
    }

    /// Sums the byte size of every file under the content directory.
    ///
    /// Recomputed per call, no caching; reporting only.
    pub fn total_storage_used(&self) -> u64 {
        let Ok(read) = fs::read_dir(self.content.dir()) else {
            return 0;
        };
        read.filter_map(|e| e.ok())
            .filter_map(|e| e.metadata().ok())
            .filter(|m| m.is_file())
            .map(|m| m.len())
            .sum()
    }

    /// Builds an export task over an immutable snapshot of `entries`
    /// bound to `destination`. Performs no I/O itself; nothing runs
    /// until the task is started.
    pub fn create_export(&self, entries: &[Entry], destination: impl Into<PathBuf>) -> ExportTask {
        ExportTask::new(entries.to_vec(), destination.into())
    }

    /// Current record set for a read-modify-write of the index.
    ///
    /// When the index is unavailable, the set is re-seeded from a
    /// directory scan so the next rewrite restores an index covering
    /// every surviving content file, not just the entry being written.
    /// The scan knows nothing about `for_entry`'s real id: its own
    /// content file, if already on disk, would come back as a record
    /// under a synthetic scanned id and then sit alongside the real
    /// record the caller upserts. That scanned double is filtered out
    /// here.
    fn known_records(&self, for_entry: &Entry) -> Vec<IndexRecord> {
        match self.index.load() {
            Ok(records) => records,
            Err(unavailable) => {
                warn!(
                    "metadata index unavailable ({}); re-seeding records from directory scan",
                    unavailable
                );
                let own_scanned_id = self
                    .content
                    .find_by_id(&for_entry.id)
                    .as_deref()
                    .and_then(Path::file_name)
                    .and_then(|n| n.to_str())
                    .map(derived_id);
                scan::scan_entries(self.content.dir())
                    .iter()
                    .filter(|scanned| Some(scanned.id) != own_scanned_id)
                    .map(IndexRecord::from_entry)
                    .collect()
            }
        }
    }
}

fn upsert(records: &mut Vec<IndexRecord>, record: IndexRecord) {
    match records.iter_mut().find(|r| r.id == record.id) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}
