//! Command dispatch: one section per CLI flag, python-argparse style --
//! several flags may be combined in one invocation.

use tracing::warn;

use arenalog_cards::{Card, CardField, RemoteLookup, Resolution, ResolvedEntry, Resolver};
use arenalog_core::prelude::*;
use arenalog_export::{
    render_custom, render_deck_text, render_deckstats, render_goldfish, PlayerLog, WildcardRarity,
};

use crate::cli::Args;

/// What a dispatch produced: listing lines go straight to stdout, export
/// text honors the `--file` redirect.
#[derive(Debug, Default)]
pub struct CommandOutput {
    pub listing: Vec<String>,
    pub export: Option<String>,
}

/// Run every requested command against the log
pub fn dispatch<R: RemoteLookup>(
    args: &Args,
    log: &PlayerLog,
    resolver: &Resolver<'_, R>,
) -> Result<CommandOutput> {
    let mut listing = Vec::new();
    let mut export = Vec::new();

    if args.collids {
        for (arena_id, count) in log.collection_ids()? {
            listing.push(format!("{arena_id} {count}"));
        }
    }

    if let Some(event) = &args.keyword {
        let value = log.last_json_block(event)?;
        listing.push(serde_json::to_string_pretty(&value).unwrap_or_default());
    }

    if args.collection {
        for (card, count) in resolved_collection(log, resolver)? {
            listing.push(format!("{} {} {}", card.arena_id, card, count));
        }
    }

    if args.inventory {
        inventory_listing(log, &mut listing)?;
    }

    if args.decks {
        for deck in log.deck_lists(resolver)? {
            listing.push(format!(
                "{} ({}) - {} cards",
                deck.name,
                deck.format,
                deck.maindeck.iter().map(|e| e.count).sum::<u64>()
            ));
        }
    }

    if !args.export.is_empty() {
        let fields = args
            .export
            .iter()
            .map(|s| s.parse::<CardField>())
            .collect::<Result<Vec<_>>>()?;
        let entries = collection_with_warnings(log, resolver)?;
        export.push(render_custom(&entries, &fields));
    }

    if args.goldfish {
        let entries = collection_with_warnings(log, resolver)?;
        export.push(render_goldfish(&entries));
    }

    if args.deckstats {
        let entries = collection_with_warnings(log, resolver)?;
        export.push(render_deckstats(&entries));
    }

    if let Some(name) = &args.export_deck {
        let decks = log.deck_lists(resolver)?;
        let deck = decks
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::config(format!("no deck named '{name}'")))?;
        export.push(render_deck_text(deck));
    }

    Ok(CommandOutput {
        listing,
        export: if export.is_empty() {
            None
        } else {
            Some(export.join("\n"))
        },
    })
}

/// Fetch the collection, warn per unresolved id, return all entries
fn collection_with_warnings<R: RemoteLookup>(
    log: &PlayerLog,
    resolver: &Resolver<'_, R>,
) -> Result<Vec<ResolvedEntry>> {
    let entries = log.collection(resolver)?;
    for entry in &entries {
        match &entry.resolution {
            Resolution::Unknown { arena_id } => {
                warn!("unknown card in collection: {arena_id}");
                eprintln!("Warning: unknown card in collection: {arena_id}");
            }
            Resolution::RemoteFailed { arena_id, message } => {
                warn!("scryfall lookup failed for {arena_id}: {message}");
                eprintln!("Warning: could not fetch {arena_id} from Scryfall: {message}");
            }
            Resolution::Card(_) => {}
        }
    }
    Ok(entries)
}

fn resolved_collection<R: RemoteLookup>(
    log: &PlayerLog,
    resolver: &Resolver<'_, R>,
) -> Result<Vec<(Card, u64)>> {
    Ok(collection_with_warnings(log, resolver)?
        .into_iter()
        .filter_map(|e| match e.resolution {
            Resolution::Card(card) => Some((card, e.count)),
            _ => None,
        })
        .collect())
}

fn inventory_listing(log: &PlayerLog, listing: &mut Vec<String>) -> Result<()> {
    let inventory = log.inventory()?;

    push_field(listing, "Gems", inventory.gems());
    push_field(listing, "Gold", inventory.gold());
    push_field(listing, "Draft tokens", inventory.draft_tokens());
    push_field(listing, "Sealed tokens", inventory.sealed_tokens());
    push_field(listing, "Vault progress", inventory.vault_progress());
    push_field(
        listing,
        "Wildcards (common)",
        inventory.wildcards(WildcardRarity::Common),
    );
    push_field(
        listing,
        "Wildcards (uncommon)",
        inventory.wildcards(WildcardRarity::Uncommon),
    );
    push_field(
        listing,
        "Wildcards (rare)",
        inventory.wildcards(WildcardRarity::Rare),
    );
    push_field(
        listing,
        "Wildcards (mythic)",
        inventory.wildcards(WildcardRarity::Mythic),
    );
    Ok(())
}

/// A missing inventory field is a diagnostic, not a failure
fn push_field<T: std::fmt::Display>(listing: &mut Vec<String>, label: &str, value: Result<T>) {
    match value {
        Ok(v) => listing.push(format!("{label}: {v}")),
        Err(e) => eprintln!("Warning: {e}"),
    }
}
