//! Collection projection: the player's card collection as (id, count) pairs.

use serde_json::Value;

use arenalog_core::prelude::*;

/// Event carrying the full card collection
pub const COLLECTION_KEYWORD: &str = "PlayerInventory.GetPlayerCardsV3";

/// Interpret a decoded (and envelope-unwrapped) collection block.
///
/// Entries map arena-id strings to counts; counts appear both as JSON
/// strings (`"3"`) and as numbers depending on client version. Source map
/// order is preserved.
pub fn collection_pairs(value: &Value) -> Result<Vec<(String, u64)>> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::log_parsing("collection block is not an object"))?;

    object
        .iter()
        .map(|(arena_id, count)| {
            let count = match count {
                Value::String(s) => s.parse::<u64>().ok(),
                Value::Number(n) => n.as_u64(),
                _ => None,
            }
            .ok_or_else(|| {
                Error::log_parsing(format!("bad count for collection entry {arena_id}"))
            })?;
            Ok((arena_id.clone(), count))
        })
        .collect()
}
