// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the check command with schema documents on disk.

use std::io::Write;
use std::path::Path;

use envoy_rs::EnvoyError;
use envoy_rs::cmd::check::{check_environment, render_config};
use envoy_rs::env::Env;
use envoy_rs::error::SchemaError;

const SCHEMA: &str = r#"
[[var]]
name = "PORT"
type = "number"
default = 8080

[[var]]
name = "NODE_ENV"
type = "enum"
values = ["development", "production", "test"]

[[var]]
name = "DEBUG"
type = "boolean"
default = false

[[var]]
name = "SENTRY_DSN"
type = "string"
optional = true
"#;

fn write_schema(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Successful checks
// =============================================================================

#[test]
fn check_valid_environment_text_output() {
    let schema = write_schema(SCHEMA);
    let env = Env::new().with("NODE_ENV", "production").with("DEBUG", "1");

    let config = check_environment(schema.path(), &env).unwrap();

    insta::assert_snapshot!(render_config(&config, false).unwrap(), @r"
    DEBUG=true
    NODE_ENV=production
    PORT=8080
    # SENTRY_DSN is unset
    ");
}

#[test]
fn check_valid_environment_json_output() {
    let schema = write_schema(SCHEMA);
    let env = Env::new()
        .with("NODE_ENV", "test")
        .with("PORT", "9000")
        .with("SENTRY_DSN", "https://key@sentry.example.com/1");

    let config = check_environment(schema.path(), &env).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render_config(&config, true).unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "DEBUG": false,
            "NODE_ENV": "test",
            "PORT": 9000.0,
            "SENTRY_DSN": "https://key@sentry.example.com/1",
        })
    );
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn check_invalid_environment_reports_all_errors() {
    let schema = write_schema(SCHEMA);
    let env = Env::new().with("PORT", "eighty").with("DEBUG", "yes");

    let err = check_environment(schema.path(), &env).unwrap_err();
    let invalid = err.downcast_ref::<EnvoyError>().unwrap();

    insta::assert_snapshot!(invalid.to_string(), @r#"
    ❌ Invalid environment configuration

    - PORT must be a number (received "eighty")
    - NODE_ENV is missing
    - DEBUG must be a boolean (received "yes")
    "#);
}

#[test]
fn check_missing_schema_file() {
    let err = check_environment(Path::new("does/not/exist.toml"), &Env::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SchemaError>(),
        Some(SchemaError::Load { .. })
    ));
}

#[test]
fn check_malformed_schema_file() {
    let schema = write_schema("[[var]\nname = ");
    let err = check_environment(schema.path(), &Env::new()).unwrap_err();
    assert!(err.downcast_ref::<SchemaError>().is_some());
    assert!(err.downcast_ref::<EnvoyError>().is_none());
}
