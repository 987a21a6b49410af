//! File-backed storage for journal entries.
//!
//! Three layers, coordinated by the [`FileStore`] façade:
//!
//! - [`content`]: one text file per entry, named deterministically
//!   from the entry itself
//! - [`index`]: a single JSON document caching summary fields for
//!   every entry, enabling listing without reading each content file
//! - [`scan`]: the fallback that rebuilds summaries straight from the
//!   content directory when the index is missing or unreadable
//!
//! The index and the directory are a deliberate dual source of truth:
//! the index wins when present and parseable, the filesystem wins
//! otherwise.

pub mod content;
pub mod file_store;
pub mod index;
pub mod scan;

pub use content::ContentStore;
pub use file_store::FileStore;
pub use index::{IndexRecord, MetadataIndex};
