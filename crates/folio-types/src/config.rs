//! Terminal configuration.
//!
//! Loaded from an optional `folio.toml` at startup; every field has a
//! default so a missing or partial file still yields a working terminal.

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Configuration for a terminal session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    /// User name shown in the prompt.
    pub user: String,
    /// Host name shown in the prompt.
    pub host: String,
    /// Endpoint the `joke` command fetches from.
    pub joke_url: String,
    /// Per-character delay for typed output, in milliseconds.
    pub typing_delay_ms: u64,
    /// Path of the directory-content file, if one should be loaded.
    pub content_path: Option<String>,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            host: "github.io".to_string(),
            joke_url: "http://v2.jokeapi.dev/joke/Programming?safe-mode".to_string(),
            typing_delay_ms: 50,
            content_path: None,
        }
    }
}

impl TermConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: TermConfig =
            toml::from_str(toml_str).map_err(|e| FolioError::Config(format!("folio.toml: {e}")))?;
        log::debug!("loaded config: user={} host={}", config.user, config.host);
        Ok(config)
    }
}
