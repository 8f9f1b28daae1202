//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Export card collection, inventory and deck lists from the MTG Arena
/// client log
#[derive(Parser, Debug, Default)]
#[command(name = "arenalog", version)]
pub struct Args {
    /// Path to the client log (default: the client's output_log.txt)
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Dump the last JSON block for an event name
    #[arg(short = 'k', long, value_name = "EVENT")]
    pub keyword: Option<String>,

    /// List collection ids and counts without card data
    #[arg(long)]
    pub collids: bool,

    /// List the collection with resolved card data
    #[arg(short = 'c', long)]
    pub collection: bool,

    /// Export the collection restricted to the given card fields
    #[arg(short = 'e', long, value_name = "FIELD", num_args = 1..)]
    pub export: Vec<String>,

    /// Export the collection in MTGGoldfish format
    #[arg(long)]
    pub goldfish: bool,

    /// Export the collection in Deckstats format
    #[arg(long)]
    pub deckstats: bool,

    /// Dump the player inventory (currency, tokens, wildcards, vault)
    #[arg(long)]
    pub inventory: bool,

    /// List deck names
    #[arg(long)]
    pub decks: bool,

    /// Export one deck as a plain-text deck list
    #[arg(long, value_name = "NAME")]
    pub export_deck: Option<String>,

    /// Write export output to a file instead of stdout
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Disable the Scryfall fallback for unknown cards
    #[arg(long)]
    pub no_fallback: bool,
}
