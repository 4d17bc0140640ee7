// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvoyError, FieldError, ParseError, format_errors};

#[test]
fn test_field_error_display() {
    let missing = FieldError::Missing {
        key: "REQUIRED_KEY".to_string(),
    };
    let invalid = FieldError::Invalid {
        key: "PORT".to_string(),
        source: ParseError::NotANumber {
            received: "abc".to_string(),
        },
    };

    insta::assert_snapshot!(missing.to_string(), @"REQUIRED_KEY is missing");
    insta::assert_snapshot!(invalid.to_string(), @r#"PORT must be a number (received "abc")"#);
    assert_eq!(missing.key(), "REQUIRED_KEY");
    assert_eq!(invalid.key(), "PORT");
}

#[test]
fn test_parse_error_display() {
    let err = ParseError::NotAllowed {
        allowed: "dev, prod".to_string(),
        received: "staging".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @r#"must be one of: dev, prod (received "staging")"#);
}

#[test]
fn test_envoy_error_display() {
    let err = EnvoyError::new(vec![
        FieldError::Invalid {
            key: "PORT".to_string(),
            source: ParseError::NotANumber {
                received: "not-a-number".to_string(),
            },
        },
        FieldError::Missing {
            key: "MISSING_KEY".to_string(),
        },
    ]);

    assert_eq!(
        err.to_string(),
        "❌ Invalid environment configuration\n\n\
         - PORT must be a number (received \"not-a-number\")\n\
         - MISSING_KEY is missing"
    );
    assert_eq!(err.len(), 2);
    assert!(!err.is_empty());
}

#[test]
fn test_format_errors_empty() {
    let errors: Vec<String> = Vec::new();
    assert_eq!(format_errors(&errors), "");
}
