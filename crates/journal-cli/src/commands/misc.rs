use journal_core::FileStore;

use crate::cli::ExportArgs;

pub fn storage(store: &FileStore) -> anyhow::Result<()> {
    let bytes = store.total_storage_used();
    println!("{} ({} bytes)", human_size(bytes), bytes);
    Ok(())
}

pub fn export(store: &FileStore, args: &ExportArgs) -> anyhow::Result<()> {
    let entries = store.load_all_entries();
    let count = entries.len();
    // Runs on its own thread; the command waits for it so the file is
    // in place when the shell prompt returns.
    let handle = store.create_export(&entries, &args.path).start();
    handle.join()?;
    println!("Exported {} entries to {}", count, args.path.display());
    Ok(())
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KiB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MiB");
    }
}
