//! Deck-list projection.
//!
//! The deck-list block is a JSON array of deck objects. Main deck and
//! sideboard are flat alternating `[id, count, id, count, ...]` sequences;
//! entries are paired two-at-a-time and resolved per id, plus one
//! representative "box art" card resolved singly.

use serde_json::Value;

use arenalog_cards::{Card, RemoteLookup, ResolvedEntry, Resolver};
use arenalog_core::prelude::*;

/// Event carrying the player's deck lists
pub const DECK_LISTS_KEYWORD: &str = "Deck.GetDeckLists";

/// One deck: identity, resolved entries and a representative card
#[derive(Debug, Clone)]
pub struct DeckList {
    pub id: String,
    pub name: String,
    pub format: String,
    pub maindeck: Vec<ResolvedEntry>,
    pub sideboard: Vec<ResolvedEntry>,

    /// Box-art card; `None` when its id could not be resolved
    pub box_art: Option<Card>,
}

/// Pair up a flat `[id, count, id, count, ...]` sequence.
///
/// An odd-length sequence is rejected: silently dropping the trailing
/// element would hide a malformed deck.
pub fn pair_flat_entries(deck_name: &str, flat: &Value) -> Result<Vec<(String, u64)>> {
    let items = flat
        .as_array()
        .ok_or_else(|| Error::log_parsing(format!("deck '{deck_name}': entries not an array")))?;

    if items.len() % 2 != 0 {
        return Err(Error::OddDeckEntries {
            deck: deck_name.to_string(),
            len: items.len(),
        });
    }

    items
        .chunks(2)
        .map(|pair| {
            let arena_id = id_string(&pair[0]).ok_or_else(|| {
                Error::log_parsing(format!("deck '{deck_name}': bad card id {}", pair[0]))
            })?;
            let count = pair[1].as_u64().ok_or_else(|| {
                Error::log_parsing(format!("deck '{deck_name}': bad count {}", pair[1]))
            })?;
            Ok((arena_id, count))
        })
        .collect()
}

/// Build deck lists from a decoded (envelope-unwrapped) block.
///
/// Per-card misses inside a deck are carried as outcomes in the entry
/// sequences; a box-art miss degrades to `None` with a diagnostic. Only
/// structural problems (non-array block, odd entry counts) fail the call.
pub fn deck_lists_from_value<R: RemoteLookup>(
    value: &Value,
    resolver: &Resolver<'_, R>,
) -> Result<Vec<DeckList>> {
    let decks = value
        .as_array()
        .ok_or_else(|| Error::log_parsing("deck-list block is not an array"))?;

    decks
        .iter()
        .map(|deck| deck_from_value(deck, resolver))
        .collect()
}

fn deck_from_value<R: RemoteLookup>(deck: &Value, resolver: &Resolver<'_, R>) -> Result<DeckList> {
    let name = deck["name"].as_str().unwrap_or_default().to_string();
    let id = id_string(&deck["id"]).ok_or_else(|| Error::missing_field("id"))?;
    let format = deck["format"].as_str().unwrap_or_default().to_string();

    let maindeck = pair_flat_entries(&name, &deck["mainDeck"])?;
    let sideboard = match deck.get("sideboard") {
        Some(flat) => pair_flat_entries(&name, flat)?,
        None => Vec::new(),
    };

    let box_art = match id_string(&deck["deckTileId"]) {
        Some(tile_id) => match resolver.resolve(&tile_id) {
            Ok(card) => Some(card),
            Err(err) => {
                warn!("deck '{name}': box art {tile_id} unresolved: {err}");
                None
            }
        },
        None => None,
    };

    Ok(DeckList {
        id,
        name,
        format,
        maindeck: resolver.resolve_many(&maindeck).collect(),
        sideboard: resolver.resolve_many(&sideboard).collect(),
        box_art,
    })
}

/// Arena ids appear both as strings and as numbers across client versions
fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
