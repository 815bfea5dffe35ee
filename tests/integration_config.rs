// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::fs;

use modver_rs::config::Config;
use modver_rs::logging::{LogFormat, LogLevel};

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    insta::assert_yaml_snapshot!(config.global, @r"
    game_id: starsector
    output_log_level: 3
    file_log_level: 5
    log_format: text
    ");
    insta::assert_yaml_snapshot!(config.http, @r"
    timeout_secs: 30
    max_concurrent: 8
    user_agent: modver-rs/0.1.0
    ");
}

#[test]
fn config_parse_all_sections() {
    let toml = r#"
[global]
game_id = "starsector-rc"
output_log_level = 4
log_file = "modver.log"
log_format = "json"

[descriptors]
primary = "mod_info.json"
secondary_extension = "vchk"

[forum]
base_url = "https://example.org/topic="

[http]
timeout_secs = 10
max_concurrent = 2
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.game_id, "starsector-rc");
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_format, LogFormat::Json);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("modver.log"))
    );
    assert_eq!(config.descriptors.secondary_extension, "vchk");
    assert_eq!(config.forum.base_url, "https://example.org/topic=");
    assert_eq!(config.http.timeout_secs, 10);
    assert_eq!(config.http.max_concurrent, 2);
}

#[test]
fn config_rejects_unknown_section_key() {
    let toml = r"
[http]
retries = 3
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn config_rejects_zero_concurrency() {
    let toml = r"
[http]
max_concurrent = 0
";
    assert!(Config::parse(toml).is_err());
}

// =============================================================================
// Layered loading
// =============================================================================

#[test]
fn config_builder_layered() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let overlay = dir.path().join("overlay.toml");
    fs::write(&base, "[http]\ntimeout_secs = 5\nmax_concurrent = 3\n").unwrap();
    fs::write(&overlay, "[http]\ntimeout_secs = 7\n").unwrap();

    let config = Config::builder()
        .add_toml_file(&base)
        .add_toml_file(&overlay)
        .build()
        .unwrap();

    assert_eq!(config.http.timeout_secs, 7);
    assert_eq!(config.http.max_concurrent, 3);
}

#[test]
fn config_builder_set_override_wins() {
    let config = Config::builder()
        .add_toml_str("[global]\ngame_id = \"from-file\"\n")
        .set_assignment("global.game_id = from-cli")
        .unwrap()
        .set_assignment("http.timeout_secs=12")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.game_id, "from-cli");
    assert_eq!(config.http.timeout_secs, 12);
}

#[test]
fn config_builder_missing_required_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::builder()
        .add_toml_file(dir.path().join("absent.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn config_builder_lists_loaded_files() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("modver.toml");
    fs::write(&present, "").unwrap();

    let loader = Config::builder()
        .add_toml_file_optional(&present)
        .add_toml_file_optional(dir.path().join("absent.toml"));

    assert_eq!(
        loader.format_loaded_files(),
        vec![format!("1. [optional] {}", present.display())]
    );
}
