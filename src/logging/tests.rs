// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogFormat, LogLevel};
use tracing::Level;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    let err = LogLevel::new(6).unwrap_err();
    insta::assert_snapshot!(err, @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 6");
}

#[test]
fn test_log_level_to_tracing_level() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(LogLevel::WARN.to_tracing_level(), Some(Level::WARN));
    assert_eq!(LogLevel::TRACE.to_tracing_level(), Some(Level::TRACE));
}

#[test]
fn test_log_level_filter_keeps_dependencies_quiet() {
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
    assert_eq!(
        LogLevel::INFO.to_filter_string(),
        "warn,modver_rs=info,modver=info"
    );
    assert_eq!(LogLevel::TRACE.to_filter_string(), "trace");
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&level).unwrap(), "4");
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_format_parse() {
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert!("xml".parse::<LogFormat>().is_err());
    assert_eq!(LogFormat::Json.to_string(), "json");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert_eq!(config.file_format(), LogFormat::Text);
    assert!(!config.show_target());
}
