// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        read / scan / check / compare
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, --set        |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             metadata     update     net
//!          mod_info.json  concurrent  reqwest
//!          + .version      fetches    Fetcher
//!                 |           |
//!                 +-----+-----+
//!                       v
//!              descriptor   version
//!            (# + JSON5)   (is_newer)
//!
//!   +-----------------------------------------+
//!   |  host   file reader, store, notifier    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod logging;
pub mod metadata;
pub mod net;
pub mod update;
pub mod version;
