// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config: GlobalConfig, DescriptorConfig, ForumConfig, HttpConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::{LogFormat, LogLevel};
use crate::metadata::{FORUM_BASE_URL, PRIMARY_DESCRIPTOR, VERSION_EXTENSION};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Game id under which attributes are stored.
    pub game_id: String,
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. No file log when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Format of the file log.
    pub log_format: LogFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            game_id: "starsector".to_string(),
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_format: LogFormat::Text,
        }
    }
}

/// Descriptor file naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescriptorConfig {
    /// Exact file name of the primary descriptor.
    pub primary: String,
    /// Extension (without dot) of the version-checker descriptor.
    pub secondary_extension: String,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            primary: PRIMARY_DESCRIPTOR.to_string(),
            secondary_extension: VERSION_EXTENSION.to_string(),
        }
    }
}

/// Forum settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForumConfig {
    /// Prefix a thread id is appended to.
    pub base_url: String,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            base_url: FORUM_BASE_URL.to_string(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of fetches in flight.
    pub max_concurrent: usize,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_concurrent: 8,
            user_agent: concat!("modver-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
