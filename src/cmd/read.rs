// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read command: metadata of a single mod folder.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::cli::mods::ReadArgs;
use crate::config::Config;
use crate::error::Result;
use crate::host::discovery::{ScanOptions, candidate_files};
use crate::host::{FsReader, LogNotifier, Notifier};
use crate::metadata::{AttributeKey, MetadataOptions, MetadataReader, ModAttributes};

/// Metadata reader over the filesystem, configured from `config`.
#[must_use]
pub fn metadata_reader(config: &Config, notifier: Arc<dyn Notifier>) -> MetadataReader {
    MetadataReader::new(Arc::new(FsReader), notifier).with_options(MetadataOptions::from_config(
        &config.descriptors,
        &config.forum,
    ))
}

/// Read one mod folder.
///
/// `fileName` is host-owned and set to the folder name.
///
/// # Errors
///
/// Returns an error if the folder cannot be listed or the metadata read
/// fails fatally (no primary descriptor, no id).
pub fn read_mod_folder(
    reader: &MetadataReader,
    mod_dir: &Path,
    options: &ScanOptions,
) -> Result<ModAttributes> {
    let files = candidate_files(mod_dir, options)?;
    let mut attributes = reader
        .read_metadata(&files)
        .with_context(|| format!("failed to read mod {}", mod_dir.display()))?;
    if let Some(name) = mod_dir.file_name() {
        attributes.set(AttributeKey::FileName, name.to_string_lossy());
    }
    Ok(attributes)
}

/// Main handler for the read command.
///
/// # Errors
///
/// Returns an error if the mod cannot be read.
pub fn run_read_command(args: &ReadArgs, config: &Config) -> Result<()> {
    let reader = metadata_reader(config, Arc::new(LogNotifier::new()));
    let options = ScanOptions::builder()
        .maybe_with_max_depth(args.max_depth)
        .with_include_hidden(args.hidden)
        .build();

    let attributes = read_mod_folder(&reader, &args.mod_dir, &options)?;
    println!("{}", serde_json::to_string_pretty(&attributes)?);
    Ok(())
}
