//! The extraction pipeline facade over one client log file.
//!
//! Every call re-opens and re-scans the whole file: the log is append-only
//! and blocks supersede each other, so there is nothing worth caching across
//! calls. The file handle is scoped to the scan and released on every exit
//! path, including parse failure.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::Value;

use arenalog_cards::{RemoteLookup, ResolvedEntry, Resolver};
use arenalog_core::prelude::*;
use arenalog_core::{decode, find_last_block, unwrap_payload, Keyword};

use crate::collection::{collection_pairs, COLLECTION_KEYWORD};
use crate::decks::{deck_lists_from_value, DeckList, DECK_LISTS_KEYWORD};
use crate::inventory::{Inventory, INVENTORY_KEYWORD};

/// Extraction entry point for a single client log file
#[derive(Debug, Clone)]
pub struct PlayerLog {
    path: PathBuf,
}

impl PlayerLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw lines of the last block for an event name
    pub fn last_keyword_block(&self, event: &str) -> Result<Vec<String>> {
        let keyword = Keyword::event(event)?;
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open client log {}", self.path.display()))?;
        find_last_block(BufReader::new(file), &keyword)
    }

    /// Last block for an event name, decoded (envelope NOT unwrapped)
    pub fn last_json_block(&self, event: &str) -> Result<Value> {
        let block = self.last_keyword_block(event)?;
        decode(&block)
    }

    /// The card collection, resolved entry by entry.
    ///
    /// Unknown/remote-failed ids surface as outcomes in the returned
    /// sequence; only a structural failure (unreadable file, unparseable
    /// block) is an error.
    pub fn collection<R: RemoteLookup>(
        &self,
        resolver: &Resolver<'_, R>,
    ) -> Result<Vec<ResolvedEntry>> {
        let value = unwrap_payload(self.last_json_block(COLLECTION_KEYWORD)?);
        let pairs = collection_pairs(&value)?;
        Ok(resolver.resolve_many(&pairs).collect())
    }

    /// Raw (id, count) pairs of the collection, no resolution
    pub fn collection_ids(&self) -> Result<Vec<(String, u64)>> {
        let value = unwrap_payload(self.last_json_block(COLLECTION_KEYWORD)?);
        collection_pairs(&value)
    }

    /// The inventory snapshot
    pub fn inventory(&self) -> Result<Inventory> {
        let value = unwrap_payload(self.last_json_block(INVENTORY_KEYWORD)?);
        Ok(Inventory::new(value))
    }

    /// All deck lists, entries resolved
    pub fn deck_lists<R: RemoteLookup>(
        &self,
        resolver: &Resolver<'_, R>,
    ) -> Result<Vec<DeckList>> {
        let value = unwrap_payload(self.last_json_block(DECK_LISTS_KEYWORD)?);
        deck_lists_from_value(&value, resolver)
    }
}
