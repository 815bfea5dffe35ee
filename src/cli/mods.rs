// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the mod commands.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `read`.
#[derive(Debug, Clone, Args)]
pub struct ReadArgs {
    /// Folder of one installed mod.
    #[arg(value_name = "MOD_DIR")]
    pub mod_dir: PathBuf,

    /// Maximum folder depth searched for descriptors.
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,

    /// Also consider hidden files and folders.
    #[arg(long)]
    pub hidden: bool,
}

/// Arguments for `scan`.
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Mods folder (each sub-folder is one mod).
    #[arg(value_name = "MODS_DIR")]
    pub mods_dir: PathBuf,

    /// Print attributes of every mod as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `check`.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Mods folder (each sub-folder is one mod).
    #[arg(value_name = "MODS_DIR")]
    pub mods_dir: PathBuf,

    /// Maximum number of concurrent requests, overrides http.max_concurrent.
    #[arg(short = 'j', long = "jobs", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,

    /// Hides the progress bar.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Print the check summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `compare`.
#[derive(Debug, Clone, Args)]
pub struct CompareArgs {
    /// Installed version.
    #[arg(value_name = "LOCAL")]
    pub local: String,

    /// Published version.
    #[arg(value_name = "REMOTE")]
    pub remote: String,
}
