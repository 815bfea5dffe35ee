// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::{LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.game_id, "starsector");
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.log_file, None);
    assert_eq!(config.descriptors.primary, "mod_info.json");
    assert_eq!(config.descriptors.secondary_extension, "version");
    assert_eq!(
        config.forum.base_url,
        "https://fractalsoftworks.com/forum/index.php?topic="
    );
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.http.max_concurrent, 8);
    assert!(config.http.user_agent.starts_with("modver-rs/"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
game_id = "starsector-test"
output_log_level = 4
log_file = "logs/modver.log"
log_format = "json"

[http]
timeout_secs = 5
"#;

    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.game_id, "starsector-test");
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/modver.log"))
    );
    assert_eq!(config.global.log_format, LogFormat::Json);
    assert_eq!(config.http.timeout_secs, 5);
    assert_eq!(config.http.max_concurrent, 8, "untouched value keeps default");
}

#[test]
fn test_deny_unknown_fields() {
    assert!(Config::parse("[global]\n dry = true").is_err());
    assert!(Config::parse("[paths]\n prefix = \"/x\"").is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Config::parse("[global]\n output_log_level = 6").is_err());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let err = Config::parse("[http]\n timeout_secs = 0").unwrap_err();
    insta::assert_snapshot!(err, @"invalid value for 'timeout_secs' in section '[http]': must be greater than 0");
}

#[test]
fn test_validate_rejects_bad_descriptor_names() {
    assert!(Config::parse("[descriptors]\n primary = \"  \"").is_err());
    assert!(Config::parse("[descriptors]\n secondary_extension = \".version\"").is_err());
    assert!(Config::parse("[http]\n max_concurrent = 0").is_err());
}

#[test]
fn test_format_options() {
    let config = Config::default();
    let options = config.format_options();

    assert_eq!(options.len(), 11);
    assert_eq!(options[0], "descriptors.primary             = mod_info.json");
    assert!(options.iter().any(|o| o == "http.max_concurrent             = 8"));
    assert!(options.iter().any(|o| o == "global.log_file                 = "));

    let keys: Vec<&str> = options
        .iter()
        .filter_map(|o| o.split_whitespace().next())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted, "options should be sorted by key");
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[global]\n game_id = \"a\"")
        .add_toml_str("[http]\n timeout_secs = 3");

    insta::assert_debug_snapshot!(loader.format_loaded_files(), @r#"
    [
        "1. [string] <string>",
        "2. [string] <string>",
    ]
    "#);
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/path.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok(), "missing optional file is not an error");
}

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[forum]
base_url = "https://forum.test/t/"
"#
    )
    .expect("failed to write temp file");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert_eq!(config.forum.base_url, "https://forum.test/t/");
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/to/modver.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("MODVERTEST_HTTP__TIMEOUT_SECS", "12");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[http]\n timeout_secs = 3")
        .with_env_prefix("MODVERTEST")
        .build()
        .expect("build should succeed");

    assert_eq!(config.http.timeout_secs, 12, "env var should override TOML");

    // SAFETY: same as above.
    unsafe {
        std::env::remove_var("MODVERTEST_HTTP__TIMEOUT_SECS");
    }
}

#[test]
fn test_config_loader_set_assignment() {
    let config = ConfigLoader::new()
        .add_toml_str("[http]\n max_concurrent = 2")
        .set_assignment("http.max_concurrent = 16")
        .expect("set should succeed")
        .set_assignment("global.game_id=other")
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert_eq!(config.http.max_concurrent, 16);
    assert_eq!(config.global.game_id, "other");
}

#[test]
fn test_config_loader_set_assignment_rejects_garbage() {
    assert!(ConfigLoader::new().set_assignment("no-equals").is_err());
    assert!(ConfigLoader::new().set_assignment("=value").is_err());
}

#[test]
fn test_config_loader_layered_sources() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[global]
game_id = "from-file"

[http]
timeout_secs = 10
"#
    )
    .expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[http]\n timeout_secs = 20")
        .build()
        .expect("build should succeed");

    assert_eq!(config.global.game_id, "from-file", "file value should persist");
    assert_eq!(config.http.timeout_secs, 20, "string should override file");
}
