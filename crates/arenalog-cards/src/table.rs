//! Local static card table, embedded at build time.
//!
//! Maps arena ids to full card records without touching the network. Ids
//! absent from the table are resolved through the Scryfall fallback by the
//! [`Resolver`](crate::resolver::Resolver).

use std::collections::HashMap;
use std::sync::LazyLock;

use arenalog_core::prelude::*;

use crate::card::Card;

static CARDS_JSON: &str = include_str!("../data/cards.json");

static BUILTIN: LazyLock<CardTable> = LazyLock::new(|| {
    CardTable::from_json(CARDS_JSON).expect("embedded card table is valid JSON")
});

/// Exact-match lookup table keyed by arena id
#[derive(Debug)]
pub struct CardTable {
    by_arena_id: HashMap<u64, Card>,
}

impl CardTable {
    /// The table embedded in the binary
    pub fn builtin() -> &'static CardTable {
        &BUILTIN
    }

    /// Build a table from a JSON array of card records
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<Card> =
            serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))?;
        Ok(Self::from_cards(cards))
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let by_arena_id = cards.into_iter().map(|c| (c.arena_id, c)).collect();
        Self { by_arena_id }
    }

    pub fn len(&self) -> usize {
        self.by_arena_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_arena_id.is_empty()
    }

    /// Find a card by its arena id (string-typed, as decoded from the log).
    ///
    /// # Errors
    /// [`Error::UnknownCard`] when the id is not numeric or has no entry.
    pub fn find_one(&self, arena_id: &str) -> Result<&Card> {
        arena_id
            .parse::<u64>()
            .ok()
            .and_then(|id| self.by_arena_id.get(&id))
            .ok_or_else(|| Error::unknown_card(arena_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_loads() {
        let table = CardTable::builtin();
        assert!(!table.is_empty());
    }

    #[test]
    fn test_find_one_hit() {
        let card = CardTable::builtin().find_one("67682").unwrap();
        assert_eq!(card.pretty_name, "Aegis of the Heavens");
        assert_eq!(card.arena_id, 67682);
    }

    #[test]
    fn test_find_one_miss() {
        let err = CardTable::builtin().find_one("123456").unwrap_err();
        assert!(matches!(err, Error::UnknownCard { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_find_one_non_numeric() {
        assert!(CardTable::builtin().find_one("not-a-number").is_err());
    }
}
