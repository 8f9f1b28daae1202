//! arenalog - export collection, inventory and deck lists from the MTG
//! Arena client log.
//!
//! The binary entry point is thin; argument parsing, config and command
//! dispatch live here.

use std::time::Duration;

use arenalog_cards::{CardTable, Resolver, ScryfallClient};
use arenalog_core::prelude::*;
use arenalog_export::PlayerLog;

pub mod cli;
pub mod commands;
pub mod config;

use cli::Args;

/// Run the CLI against the configured log file
pub fn run(args: Args) -> Result<()> {
    let settings = config::load_settings();

    let log_path = args
        .log_file
        .clone()
        .or_else(|| settings.log_file.clone())
        .or_else(config::default_log_file)
        .ok_or_else(|| Error::config("no log file configured; pass --log-file"))?;

    if !log_path.is_file() {
        return Err(Error::log_file_not_found(log_path));
    }

    let log = PlayerLog::new(&log_path);
    info!("scanning {}", log_path.display());

    let scryfall = ScryfallClient::with_base_url(
        settings.scryfall.base_url.as_str(),
        Duration::from_secs(settings.scryfall.timeout_secs),
    )?;
    let mut resolver = Resolver::new(CardTable::builtin(), scryfall);
    resolver.set_fallback(settings.fallback && !args.no_fallback);

    let output = commands::dispatch(&args, &log, &resolver)?;

    for line in &output.listing {
        println!("{line}");
    }

    if let Some(text) = output.export {
        match &args.file {
            Some(path) => {
                std::fs::write(path, text)?;
                eprintln!("Exported to {}", path.display());
            }
            None => println!("{text}"),
        }
    }

    Ok(())
}
