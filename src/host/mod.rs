// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Collaborator interfaces owned by the host mod manager.
//!
//! ```text
//!   MetadataReader ----> FileReader     read_text(path)
//!         |        \---> Notifier       post / dismiss
//!         v
//!   UpdateChecker -----> HttpClient     get(url)
//!                 \----> AttributeStore get / set
//!                  \---> Notifier
//! ```
//!
//! Components receive these as `Arc<dyn Trait>` at construction time. The
//! concrete types here are what the `modver` binary uses as its host.

pub mod discovery;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use futures_util::future::BoxFuture;

use crate::error::FetchError;
use crate::metadata::{AttributeKey, ModAttributes};

/// Read-only access to files of a mod installation.
pub trait FileReader: Send + Sync {
    /// Read a whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    fn read_text(&self, path: &Path) -> std::io::Result<String>;
}

/// Plain filesystem reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read_text(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// HTTP GET returning the response body as text.
pub trait HttpClient: Send + Sync {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>>;
}

/// Host-side per-mod attribute storage.
pub trait AttributeStore: Send + Sync {
    /// Value of `key` for `mod_id`, or `default` when unknown.
    fn get(&self, mod_id: &str, key: AttributeKey, default: &str) -> String;

    /// Store `value` under `key` for `mod_id` of `game_id`. Last write wins.
    fn set(&self, game_id: &str, mod_id: &str, key: AttributeKey, value: &str);
}

/// In-memory attribute store, grouped by game then mod id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: Mutex<BTreeMap<String, BTreeMap<String, ModAttributes>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge freshly read attributes into the stored ones for a mod.
    pub fn insert_mod(&self, game_id: &str, mod_id: &str, attributes: &ModAttributes) {
        let mut games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        games
            .entry(game_id.to_string())
            .or_default()
            .entry(mod_id.to_string())
            .or_default()
            .merge(attributes);
    }

    /// Copy of everything stored for a mod.
    #[must_use]
    pub fn attributes(&self, game_id: &str, mod_id: &str) -> Option<ModAttributes> {
        let games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        games.get(game_id)?.get(mod_id).cloned()
    }
}

impl AttributeStore for MemoryStore {
    fn get(&self, mod_id: &str, key: AttributeKey, default: &str) -> String {
        let games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        games
            .values()
            .find_map(|mods| mods.get(mod_id))
            .and_then(|attributes| attributes.get(key))
            .unwrap_or(default)
            .to_string()
    }

    fn set(&self, game_id: &str, mod_id: &str, key: AttributeKey, value: &str) {
        tracing::trace!(game = game_id, mod_id, key = %key, value, "attribute set");
        let mut games = self.games.lock().unwrap_or_else(PoisonError::into_inner);
        games
            .entry(game_id.to_string())
            .or_default()
            .entry(mod_id.to_string())
            .or_default()
            .set(key, value);
    }
}

/// Kind of user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Progress,
    Success,
    Warning,
}

/// A notification posted to the host.
///
/// Posting with an `id` that is already shown replaces that notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Option<String>,
    pub kind: NotificationKind,
    pub message: String,
    /// Completion percentage for progress notifications.
    pub percent: Option<u8>,
}

impl Notification {
    pub fn progress(id: impl Into<String>, message: impl Into<String>, percent: u8) -> Self {
        Self {
            id: Some(id.into()),
            kind: NotificationKind::Progress,
            message: message.into(),
            percent: Some(percent),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: NotificationKind::Success,
            message: message.into(),
            percent: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: NotificationKind::Warning,
            message: message.into(),
            percent: None,
        }
    }
}

/// Host notification channel.
pub trait Notifier: Send + Sync {
    /// Show a notification, returning its id.
    fn post(&self, notification: Notification) -> String;

    /// Remove a notification by id. Unknown ids are ignored.
    fn dismiss(&self, id: &str);
}

/// Notifier that writes to the tracing log.
#[derive(Debug)]
pub struct LogNotifier {
    next_id: AtomicU64,
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LogNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }
}

impl Notifier for LogNotifier {
    fn post(&self, notification: Notification) -> String {
        let id = notification.id.clone().unwrap_or_else(|| {
            format!("notification-{}", self.next_id.fetch_add(1, Ordering::Relaxed))
        });
        match notification.kind {
            NotificationKind::Progress => tracing::debug!(
                id = %id,
                percent = notification.percent.unwrap_or(0),
                "{}",
                notification.message
            ),
            NotificationKind::Success => tracing::info!(id = %id, "{}", notification.message),
            NotificationKind::Warning => tracing::warn!(id = %id, "{}", notification.message),
        }
        id
    }

    fn dismiss(&self, id: &str) {
        tracing::trace!(id, "notification dismissed");
    }
}

#[cfg(test)]
mod tests;
