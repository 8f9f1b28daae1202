//! Scryfall card-database client (remote fallback).
//!
//! Scryfall indexes cards by the same arena ids the client log uses, so a
//! local-table miss can be recovered with `GET /cards/arena/{id}`. Set
//! metadata (`GET /sets/{code}`) backs the format completion tracker.

use std::time::Duration;

use serde_json::Value;

use arenalog_core::prelude::*;

use crate::card::Card;

pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Abstraction over the remote card lookup, so resolution logic can be
/// tested without network access.
pub trait RemoteLookup {
    /// Fetch a card by arena id.
    ///
    /// # Errors
    /// [`Error::RemoteLookup`] on transport failure, non-200 response or a
    /// response body that does not map to a card.
    fn card_by_arena_id(&self, arena_id: &str) -> Result<Card>;
}

/// Abstraction over remote set metadata, the seam for the format
/// completion tracker.
pub trait SetLookup {
    /// Fetch set metadata (`card_count` etc.) by set code.
    ///
    /// # Errors
    /// [`Error::RemoteLookup`] on transport failure or a non-200 response
    /// other than 404.
    fn set_info(&self, code: &str) -> Result<Value>;
}

/// Blocking HTTP client for the Scryfall API
#[derive(Debug)]
pub struct ScryfallClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ScryfallClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }
}

impl SetLookup for ScryfallClient {
    /// A 404 is a soft miss: logs a warning and returns an empty object,
    /// matching how an unknown set is treated by callers. Other non-200
    /// responses are errors.
    fn set_info(&self, code: &str) -> Result<Value> {
        let url = format!("{}/sets/{}", self.base_url, code);
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| Error::remote_lookup(code, e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            warn!("unknown set {code}: {status}");
            return Ok(Value::Object(Default::default()));
        }
        if !status.is_success() {
            return Err(Error::remote_lookup(code, format!("status {status}")));
        }
        response
            .json()
            .map_err(|e| Error::remote_lookup(code, e.to_string()))
    }
}

impl RemoteLookup for ScryfallClient {
    fn card_by_arena_id(&self, arena_id: &str) -> Result<Card> {
        let url = format!("{}/cards/arena/{}", self.base_url, arena_id);
        debug!("scryfall lookup: {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| Error::remote_lookup(arena_id, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::remote_lookup(arena_id, format!("status {status}")));
        }

        let raw: Value = response
            .json()
            .map_err(|e| Error::remote_lookup(arena_id, e.to_string()))?;
        card_from_scryfall(&raw).map_err(|e| Error::remote_lookup(arena_id, e.to_string()))
    }
}

/// Separator Scryfall uses between primary type and subtypes
const TYPE_LINE_SEPARATOR: &str = " \u{2014} ";

/// Map a Scryfall card representation onto our [`Card`] type.
///
/// Canonical name is the display name lowercased with spaces replaced by
/// underscores; the mana cost string has `{`/`}` stripped and is split into
/// one symbol per character; the type line splits on the em-dash separator
/// with the subtype defaulting to empty.
pub fn card_from_scryfall(raw: &Value) -> Result<Card> {
    let pretty_name = str_field(raw, "name")?.to_string();
    let name = pretty_name.to_lowercase().replace(' ', "_");

    let cost = str_field(raw, "mana_cost")?
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .map(String::from)
        .collect();

    let color_identity = raw["color_identity"]
        .as_array()
        .ok_or_else(|| Error::missing_field("color_identity"))?
        .iter()
        .filter_map(Value::as_str)
        .map(String::from)
        .collect();

    let type_line = str_field(raw, "type_line")?;
    let (card_type, sub_types) = match type_line.split_once(TYPE_LINE_SEPARATOR) {
        Some((primary, sub)) => (primary.to_string(), sub.to_string()),
        None => (type_line.to_string(), String::new()),
    };

    Ok(Card {
        name,
        pretty_name,
        cost,
        color_identity,
        card_type,
        sub_types,
        set: str_field(raw, "set")?.to_uppercase(),
        rarity: str_field(raw, "rarity")?.to_string(),
        set_number: str_field(raw, "collector_number")?.to_string(),
        arena_id: raw["arena_id"]
            .as_u64()
            .ok_or_else(|| Error::missing_field("arena_id"))?,
    })
}

fn str_field<'a>(raw: &'a Value, field: &str) -> Result<&'a str> {
    raw[field]
        .as_str()
        .ok_or_else(|| Error::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn firesong_json() -> Value {
        json!({
            "name": "Firesong and Sunspeaker",
            "mana_cost": "{4}{R}{W}",
            "color_identity": ["R", "W"],
            "type_line": "Legendary Creature \u{2014} Minotaur Cleric",
            "set": "dom",
            "rarity": "rare",
            "collector_number": "280",
            "arena_id": 68369
        })
    }

    #[test]
    fn test_card_from_scryfall_full() {
        let card = card_from_scryfall(&firesong_json()).unwrap();
        assert_eq!(card.name, "firesong_and_sunspeaker");
        assert_eq!(card.pretty_name, "Firesong and Sunspeaker");
        assert_eq!(card.cost, vec!["4", "R", "W"]);
        assert_eq!(card.card_type, "Legendary Creature");
        assert_eq!(card.sub_types, "Minotaur Cleric");
        assert_eq!(card.set, "DOM");
        assert_eq!(card.arena_id, 68369);
    }

    #[test]
    fn test_card_from_scryfall_no_subtype() {
        let mut raw = firesong_json();
        raw["type_line"] = json!("Instant");
        let card = card_from_scryfall(&raw).unwrap();
        assert_eq!(card.card_type, "Instant");
        assert_eq!(card.sub_types, "");
    }

    #[test]
    fn test_card_from_scryfall_missing_field() {
        let mut raw = firesong_json();
        raw.as_object_mut().unwrap().remove("mana_cost");
        let err = card_from_scryfall(&raw).unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[test]
    fn test_cost_splits_multi_digit_symbols_per_character() {
        // "{10}" becomes ["1", "0"]; symbol-per-character is the contract
        let mut raw = firesong_json();
        raw["mana_cost"] = json!("{10}{G}");
        let card = card_from_scryfall(&raw).unwrap();
        assert_eq!(card.cost, vec!["1", "0", "G"]);
    }
}
