//! Background export of an entry snapshot to a text file.
//!
//! An [`ExportTask`] is a unit of work, not started until explicitly
//! triggered; it is bound at creation to an immutable snapshot of
//! entries, so concurrent mutation of the live set cannot corrupt the
//! exported output. The destination is overwritten in place with no
//! atomic rename: export is a best-effort convenience copy, not the
//! system of record, and a partial file on failure is acceptable.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use log::debug;

use crate::entry::Entry;
use crate::error::{JournalError, Result};

const SEPARATOR: &str = "----------------------------------------";

/// A schedulable export job bound to an entry snapshot.
///
/// Built by `FileStore::create_export`; performs no I/O until
/// [`start`](Self::start) or [`run`](Self::run) is called.
#[derive(Debug)]
pub struct ExportTask {
    entries: Vec<Entry>,
    destination: PathBuf,
}

impl ExportTask {
    pub(crate) fn new(entries: Vec<Entry>, destination: PathBuf) -> Self {
        Self {
            entries,
            destination,
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Starts the export on its own thread and returns a handle for
    /// joining or polling it.
    pub fn start(self) -> ExportHandle {
        ExportHandle {
            handle: thread::spawn(move || self.run()),
        }
    }

    /// Runs the export on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns `ExportFailure` if the destination cannot be written.
    pub fn run(&self) -> Result<()> {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(out, "Title: {}", entry.title);
            let _ = writeln!(out, "Date: {}", entry.created_at);
            out.push_str("Content:\n");
            out.push_str(&entry.content);
            if !entry.content.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        fs::write(&self.destination, out).map_err(|e| {
            JournalError::ExportFailure(format!("write {}: {}", self.destination.display(), e))
        })?;
        debug!(
            "exported {} entries to {}",
            self.entries.len(),
            self.destination.display()
        );
        Ok(())
    }
}

/// Observes a started export to completion.
#[derive(Debug)]
pub struct ExportHandle {
    handle: JoinHandle<Result<()>>,
}

impl ExportHandle {
    /// True once the export thread has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the export completes.
    ///
    /// # Errors
    ///
    /// Returns `ExportFailure` if the export failed or its thread
    /// panicked.
    pub fn join(self) -> Result<()> {
        self.handle
            .join()
            .map_err(|_| JournalError::ExportFailure("export thread panicked".to_string()))?
    }
}
