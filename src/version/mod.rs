// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version values and version descriptors.
//!
//! ```text
//! "0.65.2a-RC1"            --> Version::Text   --> "0.65.2a-RC1"
//! {major:0, minor:"65"}    --> Version::Triple --> "0.65"
//! {}                       --> Version::Triple --> ""
//!
//! normalize() --> compare::is_newer(local, remote)
//! ```
//!
//! Comparison always works on the normalized string; triples are never
//! compared component-wise.

pub mod compare;

use serde::Serialize;
use serde_json::Value;

use crate::descriptor::{self, Descriptor};

pub use compare::is_newer;

/// A version as written in a descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Version {
    /// Free-form version string.
    Text(String),
    /// Decomposed `{major, minor, patch}` form.
    Triple(VersionTriple),
}

/// `{major, minor, patch}` with each component optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionTriple {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

impl VersionTriple {
    /// Dotted join of the present components, `""` when none are present.
    #[must_use]
    pub fn normalize(&self) -> String {
        [&self.major, &self.minor, &self.patch]
            .into_iter()
            .filter_map(|c| c.as_deref().map(str::trim))
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Version {
    /// Interpret a descriptor value as a version.
    ///
    /// Strings become [`Version::Text`], objects become [`Version::Triple`]
    /// (string or number components, anything else counts as absent).
    /// Returns `None` for every other shape.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Object(map) => Some(Self::Triple(VersionTriple {
                major: map.get("major").and_then(descriptor::scalar_text),
                minor: map.get("minor").and_then(descriptor::scalar_text),
                patch: map.get("patch").and_then(descriptor::scalar_text),
            })),
            _ => None,
        }
    }

    /// The string form used for storage and comparison.
    #[must_use]
    pub fn normalize(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Triple(triple) => triple.normalize(),
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalize())
    }
}

/// Contents of a `.version` file or of the remote file it points at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionDescriptor {
    /// URL of the authoritative remote copy (`masterVersionFile`).
    pub master_version_file: Option<String>,
    pub mod_name: String,
    pub mod_thread_id: Option<String>,
    pub mod_version: Option<Version>,
}

impl VersionDescriptor {
    /// Extract the recognized keys. Unrecognized or unusable values are dropped.
    #[must_use]
    pub fn from_descriptor(descriptor: &Descriptor) -> Self {
        Self {
            master_version_file: descriptor::string_field(descriptor, "masterVersionFile")
                .filter(|url| !url.is_empty()),
            mod_name: descriptor::string_field(descriptor, "modName").unwrap_or_default(),
            mod_thread_id: descriptor::scalar_field(descriptor, "modThreadId"),
            mod_version: descriptor.get("modVersion").and_then(Version::from_value),
        }
    }

    /// Normalized `modVersion`, if one was present.
    #[must_use]
    pub fn normalized_version(&self) -> Option<String> {
        self.mod_version.as_ref().map(Version::normalize)
    }
}
