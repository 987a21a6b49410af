use journal_core::{Entry, FileStore};

use crate::cli::{AddArgs, DeleteArgs, EditArgs, ListArgs, ShowArgs};
use crate::commands::resolve_entry;
use crate::output;

pub fn add(store: &FileStore, args: &AddArgs) -> anyhow::Result<()> {
    let mut entry = Entry::new(&args.title, &args.body);
    for tag in &args.tag {
        entry.add_tag(tag);
    }
    if let Some(mood) = &args.mood {
        entry.set_mood(mood);
    }
    if args.favorite {
        entry.set_favorite(true);
    }
    store.save_entry(&entry)?;
    println!("Added entry {}", entry.id);
    Ok(())
}

pub fn list(store: &FileStore, args: &ListArgs) -> anyhow::Result<()> {
    let entries = store.load_all_entries();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::entries_json(&entries))?
        );
    } else if entries.is_empty() {
        println!("No entries.");
    } else {
        output::print_table(&entries);
    }
    Ok(())
}

pub fn show(store: &FileStore, args: &ShowArgs) -> anyhow::Result<()> {
    let entry = resolve_entry(store, &args.id)?;
    output::print_entry(&entry);
    Ok(())
}

pub fn edit(store: &FileStore, args: &EditArgs) -> anyhow::Result<()> {
    let mut entry = resolve_entry(store, &args.id)?;
    if let Some(title) = &args.title {
        entry.set_title(title);
    }
    if let Some(body) = &args.body {
        entry.set_content(body);
    }
    for tag in &args.tag {
        entry.add_tag(tag);
    }
    if let Some(mood) = &args.mood {
        entry.set_mood(mood);
    }
    if let Some(favorite) = args.favorite {
        entry.set_favorite(favorite);
    }
    store.update_entry(&entry)?;
    println!("Updated entry {}", entry.id);
    Ok(())
}

pub fn delete(store: &FileStore, args: &DeleteArgs) -> anyhow::Result<()> {
    let entry = resolve_entry(store, &args.id)?;
    store.delete_entry(&entry)?;
    println!("Deleted entry {}", entry.id);
    Ok(())
}
