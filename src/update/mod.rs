// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Update check over a set of installed mods.
//!
//! ```text
//! check_for_updates(mod_ids, events)
//!   |
//!   +-- empty --------------------------------> default summary, no events
//!   |
//!   +-- Progress 0/N ------------------------ notifier: progress (id)
//!   |
//!   +-- JoinSet, Semaphore(max_concurrent)
//!   |     task: onlineVersionUrl --> HttpClient::get --> parse --> modVersion
//!   |     join loop: Progress k/N per resolved mod (completion order)
//!   |     cancel token: abort in-flight, drain and keep what already resolved
//!   |     panicked task: mod counted as failed
//!   |
//!   +-- compare: is_newer(displayVersion, remote modVersion)
//!   |     update --> store.set(onlineVersion, lastUpdateTime)
//!   |
//!   +-- Finished(CheckSummary) -------------- notifier: dismiss progress
//!                                                       success | warning | nothing
//! ```
//!
//! A failed fetch only removes that mod from the results. Without
//! cancellation a check over N mods emits exactly N + 2 events.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::descriptor;
use crate::error::FetchError;
use crate::host::{AttributeStore, HttpClient, Notification, Notifier};
use crate::metadata::AttributeKey;
use crate::version::{VersionDescriptor, is_newer};

/// Notification id of the running check's progress display.
pub const PROGRESS_ID: &str = "modver-update-check";

/// Default number of fetches in flight.
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Per-mod outcome of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub mod_id: String,
    pub installed_version: String,
    pub online_version: String,
    pub has_update: bool,
    pub checked_at: DateTime<Utc>,
    /// The host should offer to open the mod's source page.
    pub show_in_browser: bool,
}

/// Aggregate of a finished check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    /// Number of mods the check was asked about.
    pub total: usize,
    /// One entry per mod whose remote descriptor was fetched, sorted by id.
    pub results: Vec<UpdateResult>,
    /// Mods whose fetch failed.
    pub failed: Vec<String>,
    /// Mods without an `onlineVersionUrl`.
    pub unchecked: Vec<String>,
    /// The check was cancelled before every mod resolved.
    pub cancelled: bool,
}

impl CheckSummary {
    /// Results that carry an update.
    pub fn updates(&self) -> impl Iterator<Item = &UpdateResult> {
        self.results.iter().filter(|r| r.has_update)
    }

    #[must_use]
    pub fn update_count(&self) -> usize {
        self.updates().count()
    }

    /// Every attempted fetch failed.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        !self.failed.is_empty() && self.results.is_empty()
    }
}

/// Event stream of a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
    Progress {
        completed: usize,
        total: usize,
        percent: u8,
    },
    Finished(CheckSummary),
}

impl UpdateEvent {
    fn progress(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            100
        } else {
            u8::try_from(completed * 100 / total).unwrap_or(100)
        };
        Self::Progress {
            completed,
            total,
            percent,
        }
    }
}

/// How one mod's fetch resolved.
enum Resolution {
    Fetched(String),
    NoUrl,
    Failed(FetchError),
}

/// Fetches remote version descriptors and compares them with installed versions.
pub struct UpdateChecker {
    http: Arc<dyn HttpClient>,
    store: Arc<dyn AttributeStore>,
    notifier: Arc<dyn Notifier>,
    game_id: String,
    max_concurrent: usize,
    cancel_token: CancellationToken,
}

impl UpdateChecker {
    #[must_use]
    pub fn new(
        http: Arc<dyn HttpClient>,
        store: Arc<dyn AttributeStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            http,
            store,
            notifier,
            game_id: "starsector".to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Game id used for attribute writes.
    #[must_use]
    pub fn with_game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = game_id.into();
        self
    }

    /// Upper bound of fetches in flight (at least 1).
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    #[must_use]
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    /// Token that cancels a running check.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Check `mod_ids` for updates, reporting through `events`.
    ///
    /// Attributes are read from and written to the store. A dropped receiver
    /// does not stop the check.
    pub async fn check_for_updates(
        &self,
        mod_ids: &[String],
        events: &flume::Sender<UpdateEvent>,
    ) -> CheckSummary {
        let total = mod_ids.len();
        if total == 0 {
            debug!("no mods to check");
            return CheckSummary::default();
        }

        info!(total, game = %self.game_id, "checking mods for updates");
        emit(events, UpdateEvent::progress(0, total)).await;
        let progress_id = self.notifier.post(Notification::progress(
            PROGRESS_ID,
            format!("Checking {total} mod(s) for updates"),
            0,
        ));

        let limiter = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();
        let mut pending = HashMap::with_capacity(total);
        for mod_id in mod_ids {
            let url = self
                .store
                .get(mod_id, AttributeKey::OnlineVersionUrl, "")
                .trim()
                .to_string();
            let http = Arc::clone(&self.http);
            let limiter = Arc::clone(&limiter);
            let handle = tasks.spawn(async move { resolve(http.as_ref(), &limiter, &url).await });
            pending.insert(handle.id(), mod_id.clone());
        }

        let mut summary = CheckSummary {
            total,
            ..CheckSummary::default()
        };
        let mut fetched = Vec::new();
        let mut completed = 0;

        // After cancellation the set is still drained: fetches that already
        // finished are kept, aborted ones come back as cancelled join errors.
        loop {
            let joined = tokio::select! {
                biased;
                () = self.cancel_token.cancelled(), if !summary.cancelled => {
                    warn!(completed, total, "update check cancelled");
                    tasks.abort_all();
                    summary.cancelled = true;
                    continue;
                }
                joined = tasks.join_next_with_id() => joined,
            };
            let Some(joined) = joined else { break };

            match joined {
                Ok((id, resolution)) => {
                    let mod_id = pending.remove(&id).unwrap_or_default();
                    match resolution {
                        Resolution::Fetched(version) => {
                            debug!(mod_id = %mod_id, online = %version, "remote version fetched");
                            fetched.push((mod_id, version));
                        }
                        Resolution::NoUrl => {
                            debug!(mod_id = %mod_id, "no online version url, skipped");
                            summary.unchecked.push(mod_id);
                        }
                        Resolution::Failed(e) => {
                            warn!(mod_id = %mod_id, error = %e, "update fetch failed");
                            summary.failed.push(mod_id);
                        }
                    }
                }
                Err(e) if e.is_cancelled() => {
                    pending.remove(&e.id());
                    continue;
                }
                Err(e) => {
                    let mod_id = pending.remove(&e.id()).unwrap_or_default();
                    warn!(mod_id = %mod_id, error = %e, "update fetch task panicked");
                    summary.failed.push(mod_id);
                }
            }

            completed += 1;
            let event = UpdateEvent::progress(completed, total);
            if let UpdateEvent::Progress { percent, .. } = event {
                self.notifier.post(Notification::progress(
                    progress_id.clone(),
                    format!("Checked {completed}/{total} mod(s)"),
                    percent,
                ));
            }
            emit(events, event).await;
        }

        summary.results = self.compare_and_apply(fetched);
        summary.failed.sort();
        summary.unchecked.sort();

        self.notifier.dismiss(&progress_id);
        self.post_summary(&summary);

        info!(
            updates = summary.update_count(),
            failed = summary.failed.len(),
            cancelled = summary.cancelled,
            "update check finished"
        );
        emit(events, UpdateEvent::Finished(summary.clone())).await;
        summary
    }

    fn compare_and_apply(&self, fetched: Vec<(String, String)>) -> Vec<UpdateResult> {
        let checked_at = Utc::now();
        let mut results: Vec<UpdateResult> = fetched
            .into_iter()
            .map(|(mod_id, online_version)| {
                let installed_version = self.store.get(&mod_id, AttributeKey::DisplayVersion, "");
                let has_update = is_newer(&installed_version, &online_version);
                let show_in_browser =
                    has_update && !self.store.get(&mod_id, AttributeKey::Source, "").is_empty();

                if has_update {
                    info!(
                        mod_id = %mod_id,
                        installed = %installed_version,
                        online = %online_version,
                        "update available"
                    );
                    self.store.set(
                        &self.game_id,
                        &mod_id,
                        AttributeKey::OnlineVersion,
                        &online_version,
                    );
                    self.store.set(
                        &self.game_id,
                        &mod_id,
                        AttributeKey::LastUpdateTime,
                        &checked_at.timestamp_millis().to_string(),
                    );
                }

                UpdateResult {
                    mod_id,
                    installed_version,
                    online_version,
                    has_update,
                    checked_at,
                    show_in_browser,
                }
            })
            .collect();
        results.sort_by(|a, b| a.mod_id.cmp(&b.mod_id));
        results
    }

    fn post_summary(&self, summary: &CheckSummary) {
        let updates = summary.update_count();
        if updates > 0 {
            let names: Vec<String> = summary
                .updates()
                .map(|r| format!("{} {} -> {}", r.mod_id, r.installed_version, r.online_version))
                .collect();
            self.notifier.post(Notification::success(format!(
                "{updates} update(s) available: {}",
                names.join(", ")
            )));
        } else if summary.all_failed() {
            self.notifier.post(Notification::warning(format!(
                "Update check failed for all {} mod(s)",
                summary.failed.len()
            )));
        } else if summary.cancelled {
            self.notifier
                .post(Notification::warning("Update check cancelled"));
        }
    }
}

async fn resolve(http: &dyn HttpClient, limiter: &Semaphore, url: &str) -> Resolution {
    if url.is_empty() {
        return Resolution::NoUrl;
    }
    let Ok(_permit) = limiter.acquire().await else {
        return Resolution::Failed(FetchError::Request {
            url: url.to_string(),
            message: "fetch limiter closed".to_string(),
        });
    };
    match fetch_online_version(http, url).await {
        Ok(version) => Resolution::Fetched(version),
        Err(e) => Resolution::Failed(e),
    }
}

/// Fetch a remote version descriptor and return its normalized `modVersion`.
///
/// # Errors
///
/// Returns the transport error of `http`, [`FetchError::Unparsable`] for a
/// body that is not a descriptor, and [`FetchError::MissingVersion`] when
/// `modVersion` is absent or empty.
pub async fn fetch_online_version(http: &dyn HttpClient, url: &str) -> Result<String, FetchError> {
    let body = http.get(url).await?;
    let parsed = descriptor::parse(&body).map_err(|source| FetchError::Unparsable {
        url: url.to_string(),
        source,
    })?;
    VersionDescriptor::from_descriptor(&parsed)
        .normalized_version()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| FetchError::MissingVersion {
            url: url.to_string(),
        })
}

async fn emit(events: &flume::Sender<UpdateEvent>, event: UpdateEvent) {
    if events.send_async(event).await.is_err() {
        debug!("update event receiver dropped");
    }
}
