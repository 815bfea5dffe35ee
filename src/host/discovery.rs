// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod folder discovery for the command-line host.
//!
//! ```text
//! mods/                      mod_folders()     -> [mods/LazyLib, mods/Nexerelin]
//!   LazyLib/                 candidate_files() -> mod_info.json
//!     mod_info.json                               lazylib.version
//!     lazylib.version                             jars/LazyLib.jar
//!     jars/LazyLib.jar
//! ```
//!
//! Candidate files are ordered shallow-first, then by path, so a descriptor
//! at the mod root always precedes one nested deeper.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use ignore::WalkBuilder;
use tracing::warn;

use crate::error::Result;

/// Options for listing a mod's files.
#[derive(Debug, Clone, Builder)]
pub struct ScanOptions {
    /// Maximum depth below the mod folder (None = unlimited).
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Include hidden files and folders.
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScanOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }
}

/// List every file under `mod_dir`.
///
/// Ignore files (`.gitignore`, `.ignore`) are not honoured: a mod folder is
/// taken as installed.
///
/// # Errors
///
/// Returns an error if `mod_dir` is not a directory.
pub fn candidate_files(mod_dir: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    if !mod_dir.is_dir() {
        anyhow::bail!("mod folder does not exist: {}", mod_dir.display());
    }

    let walker = WalkBuilder::new(mod_dir)
        .hidden(!options.include_hidden())
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .max_depth(options.max_depth())
        .build();

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, folder = %mod_dir.display(), "walk error"),
        }
    }

    files.sort_by(|a, b| {
        a.components()
            .count()
            .cmp(&b.components().count())
            .then_with(|| a.cmp(b))
    });
    Ok(files)
}

/// Immediate sub-folders of a mods directory, sorted by name.
///
/// # Errors
///
/// Returns an error if `root` cannot be listed.
pub fn mod_folders(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("failed to list mods folder {}", root.display()))?;

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", root.display()))?;
        if entry.file_type().is_ok_and(|ft| ft.is_dir()) {
            folders.push(entry.path());
        }
    }
    folders.sort();
    Ok(folders)
}
