//! Journal CLI - a file-backed personal journal
//!
//! Thin command-line caller over the `journal-core` persistence
//! engine: every subcommand maps onto one of the store's public
//! operations and keeps no state of its own.

mod cli;
mod commands;
mod output;

use clap::Parser;
use journal_core::FileStore;

use crate::cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let store = FileStore::open(&cli.data_dir)?;
    match &cli.command {
        Commands::Add(args) => commands::entries::add(&store, args),
        Commands::List(args) => commands::entries::list(&store, args),
        Commands::Show(args) => commands::entries::show(&store, args),
        Commands::Edit(args) => commands::entries::edit(&store, args),
        Commands::Delete(args) => commands::entries::delete(&store, args),
        Commands::Storage => commands::misc::storage(&store),
        Commands::Export(args) => commands::misc::export(&store, args),
    }
}
