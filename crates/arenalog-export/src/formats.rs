//! Format metadata from the client's `formats.json`.
//!
//! Backs the set-completion tracker: which sets a constructed format
//! currently contains, and how many cards each set has (via Scryfall set
//! metadata).

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use arenalog_cards::SetLookup;
use arenalog_core::prelude::*;

/// Reader over the client's formats file
#[derive(Debug, Clone)]
pub struct Formats {
    path: PathBuf,
}

impl Formats {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<Value> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read formats file {}", self.path.display()))?;
        serde_json::from_str(&text).map_err(|e| Error::log_parsing(e.to_string()))
    }

    /// Set codes of a named format (case-insensitive).
    ///
    /// `DAR` gets its historical alias `DOM` appended alongside, since
    /// external tools index Dominaria under either code.
    pub fn format_sets(&self, format_name: &str) -> Result<Vec<String>> {
        let data = self.read()?;
        let formats = data
            .as_array()
            .ok_or_else(|| Error::log_parsing("formats file is not an array"))?;

        let mut sets = Vec::new();
        for entry in formats {
            let name = entry["name"].as_str().unwrap_or_default();
            if !name.eq_ignore_ascii_case(format_name) {
                continue;
            }
            for set in entry["sets"].as_array().into_iter().flatten() {
                if let Some(code) = set.as_str() {
                    sets.push(code.to_string());
                    if code == "DAR" {
                        sets.push("DOM".to_string());
                    }
                }
            }
        }
        Ok(sets)
    }

    /// Number of cards in a set, from Scryfall set metadata.
    ///
    /// An unknown set (empty metadata) counts as zero.
    pub fn set_card_count<S: SetLookup>(&self, client: &S, code: &str) -> Result<u64> {
        let info = client.set_info(code)?;
        Ok(info["card_count"].as_u64().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Stub set metadata keyed by code; unknown codes get empty metadata
    struct StubSets;

    impl SetLookup for StubSets {
        fn set_info(&self, code: &str) -> Result<Value> {
            match code {
                "DOM" => Ok(json!({"code": "dom", "card_count": 280})),
                _ => Ok(json!({})),
            }
        }
    }

    fn formats_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_sets() {
        let file = formats_file(
            r#"[{"name": "Standard", "sets": ["XLN", "RIX", "DAR", "M19"]},
                {"name": "Singleton", "sets": ["M19"]}]"#,
        );
        let formats = Formats::new(file.path());
        let sets = formats.format_sets("standard").unwrap();
        assert_eq!(sets, vec!["XLN", "RIX", "DAR", "DOM", "M19"]);
    }

    #[test]
    fn test_unknown_format_is_empty() {
        let file = formats_file(r#"[{"name": "Standard", "sets": ["M19"]}]"#);
        let formats = Formats::new(file.path());
        assert!(formats.format_sets("pauper").unwrap().is_empty());
    }

    #[test]
    fn test_set_card_count_from_metadata() {
        let file = formats_file("[]");
        let formats = Formats::new(file.path());
        assert_eq!(formats.set_card_count(&StubSets, "DOM").unwrap(), 280);
    }

    #[test]
    fn test_set_card_count_unknown_set_is_zero() {
        let file = formats_file("[]");
        let formats = Formats::new(file.path());
        assert_eq!(formats.set_card_count(&StubSets, "ZZZ").unwrap(), 0);
    }

    #[test]
    fn test_malformed_formats_file() {
        let file = formats_file("{ not json");
        let formats = Formats::new(file.path());
        let err = formats.format_sets("standard").unwrap_err();
        assert!(matches!(err, Error::LogParsing { .. }));
    }
}
