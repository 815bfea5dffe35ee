// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compare command.

use crate::cli::mods::CompareArgs;
use crate::version::is_newer;

/// Verdict printed by `compare`.
#[must_use]
pub fn verdict(local: &str, remote: &str) -> &'static str {
    if is_newer(local, remote) {
        "newer"
    } else {
        "not newer"
    }
}

/// Print whether the remote version is newer than the local one.
pub fn run_compare_command(args: &CompareArgs) {
    tracing::debug!(local = %args.local, remote = %args.remote, "comparing versions");
    println!("{}", verdict(&args.local, &args.remote));
}
