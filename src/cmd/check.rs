// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command: scan a mods folder and look for updates online.
//!
//! ```text
//! scan_mods --> MemoryStore.insert_mod (per id)
//!           --> UpdateChecker.check_for_updates --flume--> progress bar
//!           --> CheckSummary --> table / JSON
//!
//! Ctrl+C --> CancellationToken --> partial summary
//! ```

use std::sync::{Arc, OnceLock};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::cli::mods::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::host::{LogNotifier, MemoryStore, Notifier};
use crate::net::Fetcher;
use crate::update::{CheckSummary, UpdateChecker, UpdateEvent};

use super::scan::scan_mods;

fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} mods ({percent}%)",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

fn progress_bar(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX));
    pb.set_style(bar_style());
    pb
}

/// Human-readable report of a finished check.
///
/// Updates are listed with the forum page when the mod has one.
#[must_use]
pub fn format_summary(summary: &CheckSummary, store: &MemoryStore, game_id: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for result in summary.updates() {
        lines.push(format!(
            "{}: {} -> {}",
            result.mod_id, result.installed_version, result.online_version
        ));
        let forum = result
            .show_in_browser
            .then(|| store.attributes(game_id, &result.mod_id))
            .flatten()
            .and_then(|attributes| attributes.forum_url());
        if let Some(url) = forum {
            lines.push(format!("  {url}"));
        }
    }

    let updates = summary.update_count();
    if updates == 0 && !summary.results.is_empty() {
        lines.push(format!(
            "All {} checked mod(s) are up to date",
            summary.results.len()
        ));
    }
    if !summary.failed.is_empty() {
        lines.push(format!("Could not check: {}", summary.failed.join(", ")));
    }
    if !summary.unchecked.is_empty() {
        lines.push(format!(
            "No update information: {}",
            summary.unchecked.join(", ")
        ));
    }
    if summary.cancelled {
        lines.push("Check cancelled".to_string());
    }
    lines
}

/// Main handler for the check command.
///
/// # Errors
///
/// Returns an error if the mods folder cannot be scanned, the HTTP client
/// cannot be built or the output cannot be serialized.
pub async fn run_check_command(args: &CheckArgs, config: &Config) -> Result<()> {
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier::new());
    let reader = super::read::metadata_reader(config, Arc::clone(&notifier));
    let report = scan_mods(&reader, &args.mods_dir)?;

    let game_id = config.global.game_id.as_str();
    let store = Arc::new(MemoryStore::new());
    for (id, attributes) in &report.mods {
        store.insert_mod(game_id, id, attributes);
    }
    let mod_ids: Vec<String> = report.mods.keys().cloned().collect();

    let fetcher = Fetcher::from_config(&config.http)?;
    let max_concurrent = args
        .jobs
        .map_or(config.http.max_concurrent, usize::from);
    let checker = UpdateChecker::new(Arc::new(fetcher), store.clone(), notifier)
        .with_game_id(game_id)
        .with_max_concurrent(max_concurrent);

    let cancel_token = checker.cancel_token();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Received Ctrl+C, cancelling update check...");
            cancel_token.cancel();
        }
    });

    info!(mods = mod_ids.len(), max_concurrent, "starting update check");
    let pb = progress_bar(mod_ids.len(), args.quiet || args.json);
    let (tx, rx) = flume::unbounded();

    let check = async move {
        let summary = checker.check_for_updates(&mod_ids, &tx).await;
        drop(tx);
        summary
    };
    let render = async {
        while let Ok(event) = rx.recv_async().await {
            match event {
                UpdateEvent::Progress { completed, .. } => {
                    pb.set_position(u64::try_from(completed).unwrap_or(u64::MAX));
                }
                UpdateEvent::Finished(_) => pb.finish_and_clear(),
            }
        }
    };
    let (summary, ()) = tokio::join!(check, render);
    ctrl_c.abort();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in format_summary(&summary, &store, game_id) {
            println!("{line}");
        }
    }
    Ok(())
}
