// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_conversion() {
    let conversions: Vec<_> = [0_u8, 2, 5, 6, 7]
        .into_iter()
        .map(|raw| (raw, LogLevel::from_u8(raw).map(LogLevel::to_filter_string)))
        .collect();

    insta::assert_debug_snapshot!(conversions, @r#"
    [
        (
            0,
            Some(
                "off",
            ),
        ),
        (
            2,
            Some(
                "warn",
            ),
        ),
        (
            5,
            Some(
                "warn,envoy_rs=trace",
            ),
        ),
        (
            6,
            Some(
                "trace",
            ),
        ),
        (
            7,
            None,
        ),
    ]
    "#);
}

#[test]
fn test_log_level_try_from() {
    assert_eq!(LogLevel::try_from(3), Ok(LogLevel::INFO));
    assert_eq!(LogLevel::try_from(9), Err(9));
    assert_eq!(u8::from(LogLevel::DEBUG), 4);
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(LogLevel::DUMP.to_tracing_level(), Some(tracing::Level::TRACE));
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());

    let config = LogConfig::builder()
        .with_console_level(LogLevel::ERROR)
        .maybe_with_log_file(Some("out/envoy.log".to_string()))
        .build();
    assert_eq!(config.console_level(), LogLevel::ERROR);
    assert_eq!(config.log_file(), Some("out/envoy.log"));
}
