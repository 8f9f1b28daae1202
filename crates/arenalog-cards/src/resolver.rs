//! Card resolution: local table first, Scryfall fallback second.
//!
//! Resolution has exactly three outcomes and callers must be able to count
//! all of them, so the result is a tagged union rather than an error path:
//! a resolved [`Card`], an unknown-card signal (local miss, no remote
//! attempted or remote disabled) or a remote-lookup failure (local miss,
//! remote attempted and failed).

use arenalog_core::prelude::*;

use crate::card::Card;
use crate::scryfall::RemoteLookup;
use crate::table::CardTable;

/// One of the three resolution outcomes
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Card(Card),

    /// No entry in the local table
    Unknown { arena_id: String },

    /// Local miss and the Scryfall attempt failed
    RemoteFailed { arena_id: String, message: String },
}

impl Resolution {
    pub fn card(&self) -> Option<&Card> {
        match self {
            Resolution::Card(card) => Some(card),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Card(_))
    }
}

/// A resolution outcome paired with the id and count it came from.
///
/// Counts attached to `Unknown`/`RemoteFailed` outcomes are zero or
/// untrustworthy; aggregating callers must only sum resolved entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub arena_id: String,
    pub resolution: Resolution,
    pub count: u64,
}

/// Resolves arena ids against the local table with optional Scryfall fallback
#[derive(Debug)]
pub struct Resolver<'a, R> {
    table: &'a CardTable,
    remote: R,
    fallback: bool,
}

impl<'a, R: RemoteLookup> Resolver<'a, R> {
    /// Fallback is enabled by default
    pub fn new(table: &'a CardTable, remote: R) -> Self {
        Self {
            table,
            remote,
            fallback: true,
        }
    }

    /// Enable/disable the Scryfall fallback
    pub fn set_fallback(&mut self, enabled: bool) {
        self.fallback = enabled;
    }

    pub fn fallback_enabled(&self) -> bool {
        self.fallback
    }

    /// Resolve a single id to a card.
    ///
    /// # Errors
    /// [`Error::UnknownCard`] on a local miss with fallback disabled,
    /// [`Error::RemoteLookup`] when the fallback attempt fails.
    pub fn resolve(&self, arena_id: &str) -> Result<Card> {
        match self.table.find_one(arena_id) {
            Ok(card) => Ok(card.clone()),
            Err(_) if self.fallback => {
                debug!("local miss for {arena_id}, trying Scryfall");
                self.remote.card_by_arena_id(arena_id)
            }
            Err(err) => Err(err),
        }
    }

    /// Resolve `(id, count)` pairs, yielding one outcome per attempt.
    ///
    /// A local hit yields a single resolved entry. A local miss yields the
    /// `Unknown` outcome first (original count), then -- with fallback
    /// enabled -- a second entry for the same id: the resolved card with the
    /// original count on success, or `RemoteFailed` with count zero.
    /// Callers iterating the sequence may therefore see two entries for one
    /// input id. Output follows input order.
    pub fn resolve_many<'s>(
        &'s self,
        pairs: &'s [(String, u64)],
    ) -> impl Iterator<Item = ResolvedEntry> + 's {
        pairs.iter().flat_map(move |(arena_id, count)| {
            let mut out = Vec::with_capacity(2);
            match self.table.find_one(arena_id) {
                Ok(card) => out.push(ResolvedEntry {
                    arena_id: arena_id.clone(),
                    resolution: Resolution::Card(card.clone()),
                    count: *count,
                }),
                Err(_) => {
                    out.push(ResolvedEntry {
                        arena_id: arena_id.clone(),
                        resolution: Resolution::Unknown {
                            arena_id: arena_id.clone(),
                        },
                        count: *count,
                    });
                    if self.fallback {
                        match self.remote.card_by_arena_id(arena_id) {
                            Ok(card) => out.push(ResolvedEntry {
                                arena_id: arena_id.clone(),
                                resolution: Resolution::Card(card),
                                count: *count,
                            }),
                            Err(err) => out.push(ResolvedEntry {
                                arena_id: arena_id.clone(),
                                resolution: Resolution::RemoteFailed {
                                    arena_id: arena_id.clone(),
                                    message: err.to_string(),
                                },
                                count: 0,
                            }),
                        }
                    }
                }
            }
            out
        })
    }
}
