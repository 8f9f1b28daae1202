//! The Card domain type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use arenalog_core::prelude::*;

/// A resolved card, immutable once constructed.
///
/// Produced either from the embedded local table or from a Scryfall lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Canonical lowercase name, spaces replaced by underscores
    pub name: String,

    /// Display name as printed on the card
    pub pretty_name: String,

    /// Mana cost as one symbol per element (`["1", "W"]`)
    pub cost: Vec<String>,

    /// Color identity letters (`["W", "U"]`)
    pub color_identity: Vec<String>,

    /// Primary type (`Creature`, `Instant`, ...)
    pub card_type: String,

    /// Subtype string after the type-line separator; empty when absent
    pub sub_types: String,

    /// Set code, uppercase
    pub set: String,

    pub rarity: String,

    /// Collector number within the set
    pub set_number: String,

    /// The game client's internal numeric identifier
    pub arena_id: u64,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.pretty_name, self.set, self.set_number)
    }
}

/// A selectable Card field for custom exports (`--export name set ...`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Name,
    PrettyName,
    Cost,
    SubTypes,
    Set,
    SetNumber,
    CardType,
    ArenaId,
}

impl CardField {
    pub const ALL: [CardField; 8] = [
        CardField::Name,
        CardField::PrettyName,
        CardField::Cost,
        CardField::SubTypes,
        CardField::Set,
        CardField::SetNumber,
        CardField::CardType,
        CardField::ArenaId,
    ];

    /// Field name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            CardField::Name => "name",
            CardField::PrettyName => "pretty_name",
            CardField::Cost => "cost",
            CardField::SubTypes => "sub_types",
            CardField::Set => "set",
            CardField::SetNumber => "set_number",
            CardField::CardType => "card_type",
            CardField::ArenaId => "arena_id",
        }
    }

    /// Render this field of `card` as text
    pub fn get(&self, card: &Card) -> String {
        match self {
            CardField::Name => card.name.clone(),
            CardField::PrettyName => card.pretty_name.clone(),
            CardField::Cost => card.cost.join(""),
            CardField::SubTypes => card.sub_types.clone(),
            CardField::Set => card.set.clone(),
            CardField::SetNumber => card.set_number.clone(),
            CardField::CardType => card.card_type.clone(),
            CardField::ArenaId => card.arena_id.to_string(),
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CardField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::config(format!("unknown export field: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Card {
        Card {
            name: "bomat_courier".into(),
            pretty_name: "Bomat Courier".into(),
            cost: vec!["1".into()],
            color_identity: vec![],
            card_type: "Artifact Creature".into(),
            sub_types: "Construct".into(),
            set: "KLD".into(),
            rarity: "rare".into(),
            set_number: "199".into(),
            arena_id: 64037,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "Bomat Courier (KLD) 199");
    }

    #[test]
    fn test_field_round_trip() {
        for field in CardField::ALL {
            assert_eq!(field.as_str().parse::<CardField>().unwrap(), field);
        }
    }

    #[test]
    fn test_field_get() {
        let card = sample();
        assert_eq!(CardField::Name.get(&card), "bomat_courier");
        assert_eq!(CardField::Cost.get(&card), "1");
        assert_eq!(CardField::ArenaId.get(&card), "64037");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!("colour".parse::<CardField>().is_err());
    }
}
