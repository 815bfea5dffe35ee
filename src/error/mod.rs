// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! Typed errors (thiserror), anyhow::Result at command level
//!
//!   Descriptor  MissingPrimary, Invalid        (fatal to one read)
//!               Malformed, Unreadable          (recovered, warning)
//!   Fetch       Http, Request, Timeout,
//!               Unparsable, MissingVersion     (recovered per mod)
//!   Config      InvalidValue, ParseError
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Descriptor Errors ---

/// Relaxed JSON text could not be turned into a descriptor object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed descriptor: {message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors raised while reading a mod's descriptor files.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// No `mod_info.json` among the candidate files. Blocks installation.
    #[error("no {file_name} found among {searched} candidate file(s)")]
    MissingPrimary { file_name: String, searched: usize },

    /// Descriptor parsed but is not a valid mod (e.g. no `id`).
    #[error("invalid descriptor '{path}': {reason}")]
    Invalid { path: String, reason: String },

    /// Descriptor text is not relaxed JSON.
    #[error("failed to parse '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: ParseError,
    },

    /// Descriptor file exists in the listing but could not be read.
    #[error("failed to read '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DescriptorError {
    /// Whether this error must abort the metadata read.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingPrimary { .. } | Self::Invalid { .. })
    }
}

// --- Fetch Errors ---

/// Failures while retrieving a remote version descriptor.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    Http { status: u16, url: String },

    /// Request could not be sent or the body could not be read.
    #[error("request failed: {url} - {message}")]
    Request { url: String, message: String },

    /// Request exceeded the configured timeout.
    #[error("request timed out: {url}")]
    Timeout { url: String },

    /// Response body is not a relaxed JSON object.
    #[error("unparsable descriptor from {url}: {source}")]
    Unparsable {
        url: String,
        #[source]
        source: ParseError,
    },

    /// Remote descriptor has no usable `modVersion`.
    #[error("remote descriptor from {url} has no modVersion")]
    MissingVersion { url: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to load configuration: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
