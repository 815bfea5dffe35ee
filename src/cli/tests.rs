// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["modver", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "modver",
        "-l",
        "4",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-s",
        "http.timeout_secs=5",
        "options",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(
        cli.global.to_config_overrides(),
        vec![
            "http.timeout_secs=5",
            "global.output_log_level=4",
            "global.file_log_level=4",
        ]
    );
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["modver", "-l", "6", "version"]).is_err());
}

#[test]
fn test_parse_check() {
    let cli = Cli::try_parse_from(["modver", "check", "mods", "-j", "4", "--json"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.mods_dir, PathBuf::from("mods"));
    assert_eq!(args.jobs, Some(4));
    assert!(args.json);
    assert!(!args.quiet);
}

#[test]
fn test_parse_check_rejects_zero_jobs() {
    assert!(Cli::try_parse_from(["modver", "check", "mods", "-j", "0"]).is_err());
}

#[test]
fn test_parse_compare() {
    let cli = Cli::try_parse_from(["modver", "compare", "0.6", "0.65"]).unwrap();
    let Some(Command::Compare(args)) = cli.command else {
        panic!("expected compare command");
    };
    assert_eq!(args.local, "0.6");
    assert_eq!(args.remote, "0.65");
}

#[test]
fn test_parse_read_options() {
    let cli =
        Cli::try_parse_from(["modver", "read", "mods/LazyLib", "--max-depth", "2", "--hidden"])
            .unwrap();
    let Some(Command::Read(args)) = cli.command else {
        panic!("expected read command");
    };
    assert_eq!(args.max_depth, Some(2));
    assert!(args.hidden);
}
