// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modver-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low -> high)
//! 1. defaults
//! 2. modver.toml (cwd, optional)
//! 3. --config
//! 4. MODVER_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODVER_GLOBAL__GAME_ID=starsector  -> global.game_id
//! MODVER_HTTP__TIMEOUT_SECS=10       -> http.timeout_secs
//! MODVER_FORUM__BASE_URL=https://... -> forum.base_url
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{DescriptorConfig, ForumConfig, GlobalConfig, HttpConfig};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MODVER";

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "modver.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub descriptors: DescriptorConfig,
    pub forum: ForumConfig,
    pub http: HttpConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modver_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modver.toml")
    ///     .with_env_prefix("MODVER")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check value ranges the types alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending value.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.global.game_id.trim().is_empty() {
            return Err(invalid("global", "game_id", "must not be empty"));
        }
        if self.descriptors.primary.trim().is_empty() {
            return Err(invalid("descriptors", "primary", "must not be empty"));
        }
        let extension = self.descriptors.secondary_extension.trim();
        if extension.is_empty() || extension.starts_with('.') {
            return Err(invalid(
                "descriptors",
                "secondary_extension",
                "must be a non-empty extension without a leading dot",
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(invalid("http", "timeout_secs", "must be greater than 0"));
        }
        if self.http.max_concurrent == 0 {
            return Err(invalid("http", "max_concurrent", "must be greater than 0"));
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered and aligned on `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("global.game_id", self.global.game_id.clone());
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.log_format", self.global.log_format.to_string());
        options.insert("descriptors.primary", self.descriptors.primary.clone());
        options.insert(
            "descriptors.secondary_extension",
            self.descriptors.secondary_extension.clone(),
        );
        options.insert("forum.base_url", self.forum.base_url.clone());
        options.insert("http.timeout_secs", self.http.timeout_secs.to_string());
        options.insert("http.max_concurrent", self.http.max_concurrent.to_string());
        options.insert("http.user_agent", self.http.user_agent.clone());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
