use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use journal_core::VERSION;

/// Journal - a file-backed personal journal
#[derive(Parser)]
#[command(name = "journal")]
#[command(version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory holding metadata.json and entries/
    #[arg(
        short,
        long,
        global = true,
        env = "JOURNAL_DATA_DIR",
        default_value = "./journal-data"
    )]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new entry
    Add(AddArgs),

    /// List entries
    List(ListArgs),

    /// Show one entry in full
    Show(ShowArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Report total storage used by entry content
    Storage,

    /// Export all entries to a text file
    Export(ExportArgs),
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Entry body
    #[arg(long, default_value = "")]
    pub body: String,

    /// Add tags to the entry (repeatable; duplicates are kept)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Set a mood marker
    #[arg(long)]
    pub mood: Option<String>,

    /// Mark the entry as a favorite
    #[arg(long)]
    pub favorite: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Emit entries as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New body
    #[arg(long)]
    pub body: Option<String>,

    /// Append tags (repeatable; duplicates are kept)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// New mood marker
    #[arg(long)]
    pub mood: Option<String>,

    /// Set or clear the favorite flag
    #[arg(long)]
    pub favorite: Option<bool>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file (created or overwritten)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}
