//! Export renderers: delimited text for external deck/collection tools.
//!
//! Renderers consume resolved entries only; unknown or remote-failed
//! outcomes are the caller's diagnostics and never reach an export row.
//! Set-code remaps are explicit per-target tables, owned here.

use arenalog_cards::{Card, CardField, ResolvedEntry};

use crate::decks::DeckList;

/// Set remaps for MTGGoldfish imports
pub const GOLDFISH_SET_REMAP: &[(&str, &str)] = &[("ANA", "ARENA"), ("DAR", "DOM")];

/// Set remaps for Deckstats imports
pub const DECKSTATS_SET_REMAP: &[(&str, &str)] = &[("ANA", "MTGA"), ("DAR", "DOM")];

/// Convert a set code to what the target tool indexes it under
pub fn normalize_set(code: &str, remap: &[(&str, &str)]) -> String {
    let upper = code.to_uppercase();
    remap
        .iter()
        .find(|(from, _)| *from == upper)
        .map(|(_, to)| to.to_string())
        .unwrap_or(upper)
}

fn resolved<'a>(
    entries: &'a [ResolvedEntry],
) -> impl Iterator<Item = (&'a Card, u64)> + 'a {
    entries
        .iter()
        .filter_map(|e| e.resolution.card().map(|card| (card, e.count)))
}

/// CSV for the MTGGoldfish collection importer
pub fn render_goldfish(entries: &[ResolvedEntry]) -> String {
    let mut out = vec!["Card,Set ID,Set Name,Quantity,Foil".to_string()];
    for (card, count) in resolved(entries) {
        let set = normalize_set(&card.set, GOLDFISH_SET_REMAP);
        out.push(format!("\"{}\",{},,{}", card.pretty_name, set, count));
    }
    out.join("\n")
}

/// CSV for the Deckstats collection importer
pub fn render_deckstats(entries: &[ResolvedEntry]) -> String {
    let mut out = vec!["card_name,amount,set_code,is_foil,is_pinned".to_string()];
    for (card, count) in resolved(entries) {
        let set = normalize_set(&card.set, DECKSTATS_SET_REMAP);
        out.push(format!(
            "\"{}\",{},\"{}\",0,0",
            card.pretty_name, count, set
        ));
    }
    out.join("\n")
}

/// CSV restricted to caller-selected card fields
pub fn render_custom(entries: &[ResolvedEntry], fields: &[CardField]) -> String {
    let header: Vec<&str> = fields.iter().map(CardField::as_str).collect();
    let mut out = vec![header.join(",")];
    for (card, _count) in resolved(entries) {
        let row: Vec<String> = fields.iter().map(|f| f.get(card)).collect();
        out.push(row.join(","));
    }
    out.join("\n")
}

/// Plain-text deck list with `Deck` and `Sideboard` sections, one
/// `{count} {name} ({set}) {collector_number}` line per entry
pub fn render_deck_text(deck: &DeckList) -> String {
    let mut out = vec!["Deck".to_string()];
    for (card, count) in resolved(&deck.maindeck) {
        out.push(deck_line(card, count));
    }
    if !deck.sideboard.is_empty() {
        out.push(String::new());
        out.push("Sideboard".to_string());
        for (card, count) in resolved(&deck.sideboard) {
            out.push(deck_line(card, count));
        }
    }
    out.join("\n")
}

fn deck_line(card: &Card, count: u64) -> String {
    format!(
        "{} {} ({}) {}",
        count, card.pretty_name, card.set, card.set_number
    )
}
