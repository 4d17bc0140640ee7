// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Primitive parsers.
//!
//! ```text
//! parse_string   "abc"   --> "abc"            (never fails)
//! parse_number   "-1.5e3" --> -1500.0         NotANumber
//! parse_boolean  "TRUE"|"1" --> true          NotABoolean
//!                "false"|"0" --> false
//! parse_enum     "prod" in [dev, prod]        NotAllowed
//! ```
//!
//! Numbers use Rust's decimal float grammar (optional sign, digits,
//! fraction, exponent). Surrounding whitespace is not trimmed, and
//! non-finite results (`inf`, `NaN`, overflow) are rejected.

use crate::error::ParseError;

/// Identity parser.
#[must_use]
pub fn parse_string(raw: &str) -> String {
    raw.to_owned()
}

/// Parses a finite decimal number.
///
/// # Errors
///
/// Returns [`ParseError::NotANumber`] if `raw` is not a finite decimal literal.
pub fn parse_number(raw: &str) -> Result<f64, ParseError> {
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ParseError::NotANumber {
            received: raw.to_owned(),
        })
}

/// Parses `true`/`1` and `false`/`0`, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`ParseError::NotABoolean`] for any other input.
pub fn parse_boolean(raw: &str) -> Result<bool, ParseError> {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Ok(false)
    } else {
        Err(ParseError::NotABoolean {
            received: raw.to_owned(),
        })
    }
}

/// Accepts `raw` only if it exactly matches one of `allowed`.
///
/// # Errors
///
/// Returns [`ParseError::NotAllowed`] listing the allowed values.
pub fn parse_enum<S: AsRef<str>>(raw: &str, allowed: &[S]) -> Result<String, ParseError> {
    if allowed.iter().any(|value| value.as_ref() == raw) {
        return Ok(raw.to_owned());
    }

    Err(ParseError::NotAllowed {
        allowed: allowed
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", "),
        received: raw.to_owned(),
    })
}
