//! Configuration file support for npm-tracker.
//!
//! Provides YAML-based configuration through `npm-tracker.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use npm_tracker::shared::Result;

const CONFIG_FILENAME: &str = "npm-tracker.config.yml";

/// Environment variable holding the upload authorization when the config names none
pub const DEFAULT_AUTHORIZATION_ENV: &str = "NPM_TRACKER_AUTHORIZATION";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub tracker_url: Option<String>,
    pub output: Option<String>,
    /// Name of the environment variable that holds the Authorization header value
    pub authorization_env: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Reads the authorization value from the configured environment variable
    pub fn authorization_from_env(&self) -> Option<String> {
        let variable = self
            .authorization_env
            .as_deref()
            .unwrap_or(DEFAULT_AUTHORIZATION_ENV);
        std::env::var(variable)
            .ok()
            .filter(|value| !value.trim().is_empty())
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

    // An empty file deserializes to null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref variable) = config.authorization_env {
        if variable.trim().is_empty() || variable.contains('=') {
            bail!(
                "Invalid config: authorization_env '{}' is not a valid environment variable name.\n\n\
                 💡 Hint: Use a name such as \"TRACKER_TOKEN\".",
                variable
            );
        }
    }
    if let Some(ref url) = config.tracker_url {
        if url.trim().is_empty() {
            bail!(
                "Invalid config: tracker_url must not be empty.\n\n\
                 💡 Hint: Remove the key or set it to the tracker base URL."
            );
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
