// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config, read, scan, check, compare
//!
//! read  : candidate_files --> MetadataReader --> fileName = folder name
//! scan  : mod_folders --> read each, skip unreadable
//! check : scan --> MemoryStore --> UpdateChecker (Fetcher, progress bar)
//! ```

pub mod check;
pub mod compare;
pub mod config;
pub mod read;
pub mod scan;
