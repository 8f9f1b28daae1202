//! Configuration file parsing for arenalog
//!
//! Reads `arenalog/config.toml` from the user config dir. All fields are
//! optional; missing file or parse failure falls back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "arenalog";

/// Global settings with load-or-default semantics
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Client log path override
    pub log_file: Option<PathBuf>,

    /// Enable the Scryfall fallback for unknown cards
    pub fallback: bool,

    pub scryfall: ScryfallSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScryfallSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: None,
            fallback: true,
            scryfall: ScryfallSettings::default(),
        }
    }
}

impl Default for ScryfallSettings {
    fn default() -> Self {
        Self {
            base_url: arenalog_cards::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Load settings from the user config dir, defaulting when absent
pub fn load_settings() -> Settings {
    let Some(base) = dirs::config_dir() else {
        return Settings::default();
    };
    load_settings_from(&base.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path, defaulting when absent or malformed
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// The client's default log location (Windows installs only)
pub fn default_log_file() -> Option<PathBuf> {
    let appdata = std::env::var_os("APPDATA")?;
    Some(
        PathBuf::from(appdata)
            .parent()?
            .join("LocalLow")
            .join("Wizards Of The Coast")
            .join("MTGA")
            .join("output_log.txt"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings_from(&temp.path().join("missing.toml"));

        assert!(settings.fallback);
        assert!(settings.log_file.is_none());
        assert_eq!(settings.scryfall.base_url, arenalog_cards::DEFAULT_BASE_URL);
        assert_eq!(settings.scryfall.timeout_secs, 10);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "log_file = \"/tmp/output_log.txt\"\nfallback = false\n\n\
             [scryfall]\nbase_url = \"http://localhost:9999\"\ntimeout_secs = 3"
        )
        .unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.log_file.unwrap().to_str(), Some("/tmp/output_log.txt"));
        assert!(!settings.fallback);
        assert_eq!(settings.scryfall.base_url, "http://localhost:9999");
        assert_eq!(settings.scryfall.timeout_secs, 3);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not [ valid toml").unwrap();

        let settings = load_settings_from(&path);
        assert!(settings.fallback);
    }
}
