//! Quill configuration.
//!
//! Loaded from `~/.quill/config.toml`. Every knob has a default, so a
//! missing file means default configuration rather than an error.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Quill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// The language emitted for code blocks that don't specify one.
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

fn default_language() -> String {
    "python".to_string()
}

impl Config {
    /// Load config from `~/.quill/config.toml`, or defaults if missing.
    /// Returns an error only if the file exists and is invalid.
    pub fn load() -> Result<Self, String> {
        let path = Self::path().ok_or("could not determine home directory")?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.quill/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".quill").join("config.toml"))
    }
}
