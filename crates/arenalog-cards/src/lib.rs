//! # arenalog-cards - Card Resolution
//!
//! Card domain types and the two-stage id resolution used by every
//! projection: an embedded local table keyed by arena id, with a Scryfall
//! fallback for ids the table does not know.
//!
//! ## Public API
//!
//! ### Domain Types (`card`)
//! - [`Card`] - immutable card record
//! - [`CardField`] - selectable field for custom exports
//!
//! ### Local Table (`table`)
//! - [`CardTable`] - exact-match arena-id lookup, embedded at build time
//!
//! ### Remote Fallback (`scryfall`)
//! - [`ScryfallClient`] - blocking Scryfall API client
//! - [`RemoteLookup`], [`SetLookup`] - trait seams so resolution and set
//!   metadata are testable without network
//!
//! ### Resolution (`resolver`)
//! - [`Resolver`] - local-then-remote resolution with a three-outcome result
//! - [`Resolution`], [`ResolvedEntry`] - tagged outcomes callers can count

pub mod card;
pub mod resolver;
pub mod scryfall;
pub mod table;

pub use card::{Card, CardField};
pub use resolver::{ResolvedEntry, Resolution, Resolver};
pub use scryfall::{card_from_scryfall, RemoteLookup, ScryfallClient, SetLookup, DEFAULT_BASE_URL};
pub use table::CardTable;
