// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Canonical per-mod attribute mapping.
//!
//! The key set is closed: [`AttributeKey`] is the only way to address an
//! attribute, so a mapping cannot hold anything else. An absent key means
//! "unknown" and reads back as the caller's default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute identifiers understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKey {
    ModSharedId,
    ModVariantId,
    ModName,
    Author,
    FileName,
    Source,
    ForumThreadId,
    DisplayVersion,
    LocalVersionCheckerVersion,
    OnlineVersionUrl,
    OnlineVersionCheckerVersion,
    GameVersion,
    LastUpdateTime,
    OnlineVersion,
}

impl AttributeKey {
    /// Stable identifier as stored by the host.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModSharedId => "modSharedId",
            Self::ModVariantId => "modVariantId",
            Self::ModName => "modName",
            Self::Author => "author",
            Self::FileName => "fileName",
            Self::Source => "source",
            Self::ForumThreadId => "forumThreadId",
            Self::DisplayVersion => "displayVersion",
            Self::LocalVersionCheckerVersion => "localVersionCheckerVersion",
            Self::OnlineVersionUrl => "onlineVersionUrl",
            Self::OnlineVersionCheckerVersion => "onlineVersionCheckerVersion",
            Self::GameVersion => "gameVersion",
            Self::LastUpdateTime => "lastUpdateTime",
            Self::OnlineVersion => "onlineVersion",
        }
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute values for one mod installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModAttributes(BTreeMap<AttributeKey, String>);

impl ModAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, `None` when unknown.
    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Value of `key`, or `default` when unknown.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: AttributeKey, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Set `key`, returning the previous value.
    pub fn set(&mut self, key: AttributeKey, value: impl Into<String>) -> Option<String> {
        self.0.insert(key, value.into())
    }

    /// Set `key` only when a value is available.
    pub fn set_opt(&mut self, key: AttributeKey, value: Option<String>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    #[must_use]
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Last-write-wins merge of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Browsable forum page: `source` followed by `forumThreadId`.
    #[must_use]
    pub fn forum_url(&self) -> Option<String> {
        let source = self.get(AttributeKey::Source).filter(|s| !s.is_empty())?;
        let thread = self
            .get(AttributeKey::ForumThreadId)
            .filter(|t| !t.is_empty())?;
        Some(format!("{source}{thread}"))
    }
}

impl FromIterator<(AttributeKey, String)> for ModAttributes {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
