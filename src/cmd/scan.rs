// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan command: metadata of every mod in a mods folder.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::cli::mods::ScanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::host::LogNotifier;
use crate::host::discovery::{ScanOptions, mod_folders};
use crate::metadata::{AttributeKey, MetadataReader, ModAttributes};

use super::read::{metadata_reader, read_mod_folder};

/// Outcome of scanning a mods folder.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Readable mods keyed by `modSharedId`.
    pub mods: BTreeMap<String, ModAttributes>,
    /// Folders that could not be read, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Read every mod folder under `mods_dir`.
///
/// Folders without a readable descriptor are skipped. A mod whose primary
/// descriptor was malformed but whose version file was read is keyed by its
/// folder name.
///
/// # Errors
///
/// Returns an error if `mods_dir` cannot be listed.
pub fn scan_mods(reader: &MetadataReader, mods_dir: &Path) -> Result<ScanReport> {
    let options = ScanOptions::default();
    let mut report = ScanReport::default();

    for folder in mod_folders(mods_dir)? {
        let attributes = match read_mod_folder(reader, &folder, &options) {
            Ok(attributes) => attributes,
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(folder = %folder.display(), error = %reason, "skipping mod folder");
                report.skipped.push((folder, reason));
                continue;
            }
        };

        let Some(id) = attributes
            .get(AttributeKey::ModSharedId)
            .or_else(|| attributes.get(AttributeKey::FileName))
            .map(str::to_string)
        else {
            continue;
        };
        if report.mods.insert(id.clone(), attributes).is_some() {
            warn!(mod_id = %id, folder = %folder.display(), "duplicate mod id, keeping last");
        }
    }

    info!(
        mods = report.mods.len(),
        skipped = report.skipped.len(),
        "scanned mods folder"
    );
    Ok(report)
}

/// One table row per mod: id, version, name.
#[must_use]
pub fn format_table(mods: &BTreeMap<String, ModAttributes>) -> Vec<String> {
    let id_width = mods.keys().map(String::len).max().unwrap_or(0);
    let version_width = mods
        .values()
        .map(|a| a.get_or(AttributeKey::DisplayVersion, "?").len())
        .max()
        .unwrap_or(0);

    mods.iter()
        .map(|(id, attributes)| {
            let version = attributes.get_or(AttributeKey::DisplayVersion, "?");
            let name = attributes.get_or(AttributeKey::ModName, "");
            format!("{id:<id_width$}  {version:<version_width$}  {name}")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Main handler for the scan command.
///
/// # Errors
///
/// Returns an error if the mods folder cannot be listed or the output
/// cannot be serialized.
pub fn run_scan_command(args: &ScanArgs, config: &Config) -> Result<()> {
    let reader = metadata_reader(config, Arc::new(LogNotifier::new()));
    let report = scan_mods(&reader, &args.mods_dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.mods)?);
    } else if report.mods.is_empty() {
        println!("No mods found in {}", args.mods_dir.display());
    } else {
        for line in format_table(&report.mods) {
            println!("{line}");
        }
    }

    for (folder, reason) in &report.skipped {
        eprintln!("skipped {}: {reason}", folder.display());
    }
    Ok(())
}
