//! # arenalog-core - Log Extraction Primitives
//!
//! Foundation crate for arenalog. Provides the keyword-block scanner, the
//! block decoder, the error taxonomy and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Scanning (`scanner`, `keyword`)
//! - [`Keyword`] - whole-word event marker (`<== EventName`)
//! - [`find_last_block()`] - single-pass, depth-aware scan returning the raw
//!   lines of the last keyword block in the log
//!
//! ### Decoding (`decoder`)
//! - [`decode()`] - parse scanned fragments as one JSON value
//! - [`unwrap_payload()`] - strip the optional `payload` envelope
//!
//! ### Error Handling (`error`)
//! - [`Error`] - custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use arenalog_core::prelude::*;
//! ```

pub mod decoder;
pub mod error;
pub mod keyword;
pub mod logging;
pub mod scanner;

/// Prelude for common imports used throughout all arenalog crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used items at crate root for convenience
pub use decoder::{decode, unwrap_payload};
pub use error::{Error, Result, ResultExt};
pub use keyword::{Keyword, EVENT_MARKER};
pub use scanner::find_last_block;
