pub mod entries;
pub mod misc;

use anyhow::bail;
use journal_core::{Entry, FileStore};

/// Resolves an entry from a full UUID or a unique prefix of one.
///
/// Ids are compared in their simple (unhyphenated) form, which is the
/// form the table output hands out; hyphenated input is accepted by
/// stripping the hyphens before matching.
pub fn resolve_entry(store: &FileStore, id: &str) -> anyhow::Result<Entry> {
    let needle = id.to_lowercase().replace('-', "");
    let mut matches: Vec<Entry> = store
        .load_all_entries()
        .into_iter()
        .filter(|e| e.id.simple().to_string().starts_with(&needle))
        .collect();
    match matches.len() {
        0 => bail!("no entry matches id \"{}\"", id),
        1 => Ok(matches.remove(0)),
        n => bail!(
            "id \"{}\" is ambiguous ({} matches); give more digits",
            id,
            n
        ),
    }
}
