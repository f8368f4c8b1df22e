//! Configuration file support for protlinks.
//!
//! Provides YAML-based configuration through `protlinks.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use protlinks::application::use_cases::MAX_COMBINED_SCORE;
use protlinks::shared::Result;

pub const CONFIG_FILENAME: &str = "protlinks.config.yml";

/// Environment variable read for the BioGRID access key
pub const ACCESS_KEY_ENV: &str = "ACCESS_KEY";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub access_key: Option<String>,
    pub format: Option<String>,
    pub min_score: Option<u32>,
    pub biogrid_base_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Access key from the flag, the config file, then `ACCESS_KEY`
    pub fn resolve_access_key(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.access_key.clone())
            .or_else(|| std::env::var(ACCESS_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(score) = config.min_score {
        if score > MAX_COMBINED_SCORE {
            bail!(
                "Invalid config: min_score must be between 0 and {}, got {}.\n\n\
                 💡 Hint: STRING combined scores are scaled to 0-1000 (600 = medium confidence).",
                MAX_COMBINED_SCORE,
                score
            );
        }
    }
    if let Some(ref key) = config.access_key {
        if key.trim().is_empty() {
            bail!(
                "Invalid config: access_key must not be empty.\n\n\
                 💡 Hint: Remove the field or set it to your BioGRID access key."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
