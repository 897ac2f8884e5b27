// File: src/config.rs
//! User configuration, read from `config.toml` in the platform config
//! directory (`~/.config/unicode-search/config.toml` on Linux).
//!
//! ```toml
//! data_file = "/home/me/.local/share/unicode-search/data.json"
//! result_limit = 30
//! hex_query_max_len = 4
//! ```
use crate::fuzzy::combiner::HEX_QUERY_MAX_LEN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "unicode-search";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Persisted settings and usage document.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// `UnicodeData.txt` the character universe is read from.
    #[serde(default = "default_unicode_data_file")]
    pub unicode_data_file: PathBuf,

    /// Number of results shown per query.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Longest query that is also matched against codepoints.
    #[serde(default = "default_hex_query_max_len")]
    pub hex_query_max_len: usize,
}

fn data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

fn default_data_file() -> PathBuf {
    data_dir().join("data.json")
}

fn default_unicode_data_file() -> PathBuf {
    data_dir().join("UnicodeData.txt")
}

fn default_result_limit() -> usize {
    20
}

fn default_hex_query_max_len() -> usize {
    HEX_QUERY_MAX_LEN
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            unicode_data_file: default_unicode_data_file(),
            result_limit: default_result_limit(),
            hex_query_max_len: default_hex_query_max_len(),
        }
    }
}

impl SearchConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Falls back to defaults when the file is missing or can't be parsed.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("Config file not found at {:?}, using defaults", path);
                Self::default()
            }
        }
    }

    /// Where the parsed character table is cached next to the data file.
    pub fn snapshot_file(&self) -> PathBuf {
        self.data_file.with_file_name("characters.bin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SearchConfig::load_from(&dir.path().join("config.toml"));
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.result_limit, 20);
        assert_eq!(config.hex_query_max_len, 4);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "result_limit = 5\ndata_file = \"/tmp/search.json\"\n").unwrap();

        let config = SearchConfig::load_from(&path);
        assert_eq!(config.result_limit, 5);
        assert_eq!(config.data_file, PathBuf::from("/tmp/search.json"));
        assert_eq!(config.snapshot_file(), PathBuf::from("/tmp/characters.bin"));
        assert_eq!(config.hex_query_max_len, HEX_QUERY_MAX_LEN);
    }

    #[test]
    fn test_unparsable_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "result_limit = \"many\"").unwrap();
        assert_eq!(SearchConfig::load_from(&path), SearchConfig::default());
    }
}
