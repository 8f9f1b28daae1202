//! # arenalog-export - Projections and Renderers
//!
//! Typed views over decoded log blocks, the [`PlayerLog`] pipeline facade,
//! and the text renderers for external collection/deck tools.
//!
//! ## Public API
//!
//! ### Projections
//! - [`collection`] - id→count map fed through the resolver
//! - [`inventory`] - currency/token/wildcard counters with lazy field access
//! - [`decks`] - deck lists decoded from flat `[id, count, ...]` sequences
//!
//! ### Pipeline (`player_log`)
//! - [`PlayerLog`] - scan/decode/project over one client log file
//!
//! ### Formats (`formats`)
//! - [`Formats`] - set lists per constructed format, set card counts
//!
//! ### Renderers (`render`)
//! - MTGGoldfish and Deckstats CSV, plain-text deck lists, custom fields

pub mod collection;
pub mod decks;
pub mod formats;
pub mod inventory;
pub mod player_log;
pub mod render;

pub use collection::{collection_pairs, COLLECTION_KEYWORD};
pub use decks::{deck_lists_from_value, pair_flat_entries, DeckList, DECK_LISTS_KEYWORD};
pub use formats::Formats;
pub use inventory::{Inventory, WildcardRarity, INVENTORY_KEYWORD};
pub use player_log::PlayerLog;
pub use render::{
    normalize_set, render_custom, render_deck_text, render_deckstats, render_goldfish,
    DECKSTATS_SET_REMAP, GOLDFISH_SET_REMAP,
};
