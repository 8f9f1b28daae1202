//! Inventory projection: currency, token and wildcard counters.
//!
//! A read-only snapshot over the decoded inventory block. Field access is
//! lazy: a missing field fails at read time with [`Error::MissingField`],
//! not at construction, so a partial block still serves the fields it has.

use serde_json::Value;

use arenalog_core::prelude::*;

/// Event carrying the player inventory
pub const INVENTORY_KEYWORD: &str = "PlayerInventory.GetPlayerInventory";

/// Wildcard rarities tracked by the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardRarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl WildcardRarity {
    fn field(&self) -> &'static str {
        match self {
            WildcardRarity::Common => "wcCommon",
            WildcardRarity::Uncommon => "wcUncommon",
            WildcardRarity::Rare => "wcRare",
            WildcardRarity::Mythic => "wcMythic",
        }
    }
}

/// Read-only snapshot of a single decoded inventory block
#[derive(Debug, Clone)]
pub struct Inventory {
    raw: Value,
}

impl Inventory {
    /// Wrap an already-decoded, envelope-unwrapped block
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn gems(&self) -> Result<u64> {
        self.u64_field("gems")
    }

    pub fn gold(&self) -> Result<u64> {
        self.u64_field("gold")
    }

    pub fn draft_tokens(&self) -> Result<u64> {
        self.u64_field("draftTokens")
    }

    pub fn sealed_tokens(&self) -> Result<u64> {
        self.u64_field("sealedTokens")
    }

    pub fn vault_progress(&self) -> Result<f64> {
        self.field("vaultProgress")?
            .as_f64()
            .ok_or_else(|| Error::missing_field("vaultProgress"))
    }

    pub fn wildcards(&self, rarity: WildcardRarity) -> Result<u64> {
        self.u64_field(rarity.field())
    }

    /// Ids of the starter decks granted to the account
    pub fn starter_decks(&self) -> Result<Vec<String>> {
        Ok(self
            .field("starterDecks")?
            .as_array()
            .ok_or_else(|| Error::missing_field("starterDecks"))?
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect())
    }

    fn field(&self, name: &str) -> Result<&Value> {
        self.raw
            .get(name)
            .ok_or_else(|| Error::missing_field(name))
    }

    fn u64_field(&self, name: &str) -> Result<u64> {
        self.field(name)?
            .as_u64()
            .ok_or_else(|| Error::missing_field(name))
    }
}
