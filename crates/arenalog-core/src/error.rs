//! Application error types with recoverable/fatal classification

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Log file not found: {path}")]
    LogFileNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Extraction Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse log block as JSON: {message}")]
    LogParsing { message: String },

    #[error("Keyword must not be empty")]
    EmptyKeyword,

    #[error("Missing field in decoded block: {field}")]
    MissingField { field: String },

    #[error("Deck '{deck}' has an odd number of flat entries: {len}")]
    OddDeckEntries { deck: String, len: usize },

    // ─────────────────────────────────────────────────────────────
    // Card Resolution Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown card id: {arena_id}")]
    UnknownCard { arena_id: String },

    #[error("Scryfall lookup failed for {arena_id}: {message}")]
    RemoteLookup { arena_id: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn log_parsing(message: impl Into<String>) -> Self {
        Self::LogParsing {
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn unknown_card(arena_id: impl Into<String>) -> Self {
        Self::UnknownCard {
            arena_id: arena_id.into(),
        }
    }

    pub fn remote_lookup(arena_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RemoteLookup {
            arena_id: arena_id.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn log_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::LogFileNotFound { path: path.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// Per-card misses are diagnostics, not failures: callers skip the card
    /// and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnknownCard { .. } | Error::RemoteLookup { .. }
        )
    }

    /// Check if this error should abort the whole extraction
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::LogFileNotFound { .. }
                | Error::LogParsing { .. }
                | Error::Config { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unknown_card("12345");
        assert_eq!(err.to_string(), "Unknown card id: 12345");

        let err = Error::log_parsing("unexpected end of input");
        assert!(err.to_string().contains("unexpected end of input"));

        let err = Error::remote_lookup("67682", "status 404");
        assert!(err.to_string().contains("67682"));
        assert!(err.to_string().contains("status 404"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::log_parsing("bad json").is_fatal());
        assert!(Error::log_file_not_found("/tmp/output_log.txt").is_fatal());
        assert!(!Error::unknown_card("123").is_fatal());
    }

    #[test]
    fn test_context_passes_through_ok() {
        let value: std::result::Result<u32, Error> = Ok(7);
        assert_eq!(value.context("never logged").unwrap(), 7);
    }

    #[test]
    fn test_context_preserves_error_variant() {
        let io_err: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io_err.context("opening log").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_with_context_lazy_message() {
        let miss: std::result::Result<(), Error> = Err(Error::unknown_card("123"));
        let err = miss
            .with_context(|| format!("resolving {}", 123))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownCard { .. }));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::unknown_card("123").is_recoverable());
        assert!(Error::remote_lookup("123", "timed out").is_recoverable());
        assert!(!Error::log_parsing("bad json").is_recoverable());
        assert!(!Error::EmptyKeyword.is_recoverable());
    }
}
