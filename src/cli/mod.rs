// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modver-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modver [global options] <command>
//! version
//! options
//! configs
//! read <MOD_DIR>
//! scan <MODS_DIR>
//! check <MODS_DIR>
//! compare <LOCAL> <REMOTE>
//! ```

pub mod global;
pub mod mods;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::mods::{CheckArgs, CompareArgs, ReadArgs, ScanArgs};
use clap::{Parser, Subcommand};

/// Starsector mod metadata and update checker.
#[derive(Debug, Parser)]
#[command(
    name = "modver",
    author,
    version,
    about = "Starsector mod metadata and update checker",
    long_about = "modver-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads mod_info.json and Version Checker files of installed\n\
                  Starsector mods and checks their published versions.\n\n\
                  Invoking `modver check <mods folder>` checks every installed mod.\n\
                  See `modver <command> --help` for more information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  modver reads `modver.toml` from the current directory if present.\n\
                  Additional files can be given with --config, those are loaded\n\
                  after it. MODVER_SECTION__KEY environment variables and --set\n\
                  override file values. Use --no-default-config to skip modver.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files in use.
    Configs,

    /// Reads the metadata of one mod folder.
    Read(ReadArgs),

    /// Reads the metadata of every mod in a mods folder.
    Scan(ScanArgs),

    /// Checks every mod in a mods folder for updates.
    Check(CheckArgs),

    /// Compares two version strings.
    Compare(CompareArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
