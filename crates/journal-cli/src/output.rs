//! Terminal and JSON rendering for entries.

use journal_core::Entry;
use serde_json::{json, Value};

/// Short id shown in tables; enough digits to paste back into `show`.
const SHORT_ID_LEN: usize = 8;

pub fn print_table(entries: &[Entry]) {
    println!(
        "{:<9} {:<17} {:<3} {:<40} TAGS",
        "ID", "CREATED", "FAV", "TITLE"
    );
    for entry in entries {
        println!(
            "{:<9} {:<17} {:<3} {:<40} {}",
            short_id(entry),
            entry.created_at.format("%Y-%m-%d %H:%M"),
            if entry.favorite { "*" } else { "" },
            truncate(&entry.title, 40),
            entry.tags.join(", "),
        );
    }
}

pub fn print_entry(entry: &Entry) {
    println!("Id:       {}", entry.id);
    println!("Title:    {}", entry.title);
    println!("Created:  {}", entry.created_at);
    println!("Modified: {}", entry.modified_at);
    if !entry.tags.is_empty() {
        println!("Tags:     {}", entry.tags.join(", "));
    }
    if let Some(mood) = &entry.mood {
        println!("Mood:     {}", mood);
    }
    if entry.favorite {
        println!("Favorite: yes");
    }
    println!();
    println!("{}", entry.content);
}

pub fn entries_json(entries: &[Entry]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|entry| {
                json!({
                    "id": entry.id,
                    "title": entry.title,
                    "content": entry.content,
                    "createdDate": entry.created_at,
                    "modifiedDate": entry.modified_at,
                    "tags": entry.tags,
                    "favorite": entry.favorite,
                    "mood": entry.mood,
                })
            })
            .collect(),
    )
}

fn short_id(entry: &Entry) -> String {
    entry.id.simple().to_string()[..SHORT_ID_LEN].to_string()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_json_uses_contract_keys() {
        let mut entry = Entry::new("T", "C");
        entry.add_tag("x");
        let value = entries_json(std::slice::from_ref(&entry));

        let record = &value[0];
        assert_eq!(record["title"], "T");
        assert_eq!(record["content"], "C");
        assert!(record["createdDate"].is_string());
        assert_eq!(record["tags"][0], "x");
        assert_eq!(record["favorite"], false);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("0123456789A", 10), "012345678…");
    }
}
