//! # Journal Core
//!
//! Embedded persistence engine for journal-style text entries.
//!
//! Each entry is durably stored as a standalone text file under a data
//! directory, with a single JSON metadata index (`metadata.json`)
//! caching summary fields for fast listing. When the index is missing
//! or unreadable, loading degrades to a full directory scan that
//! rebuilds entry summaries from the content files themselves.
//!
//! ## Architecture
//!
//! - **entry**: the in-memory entry model and its mutators
//! - **storage**: content store, metadata index, scan fallback, and
//!   the [`FileStore`] façade tying them together
//! - **export**: background export of an entry snapshot
//! - **error**: the error taxonomy shared by all operations
//!
//! A [`FileStore`] instance assumes single-writer access to its data
//! directory; there is no multi-process locking.

pub mod entry;
pub mod error;
pub mod export;
pub mod fs;
pub mod storage;

pub use entry::Entry;
pub use error::{JournalError, Result};
pub use export::{ExportHandle, ExportTask};
pub use storage::FileStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
