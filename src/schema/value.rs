// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable kinds and resolved values.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::ParseError;
use crate::parse::{parse_boolean, parse_enum, parse_number, parse_string};

/// Kind of a variable. Selects the primitive parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Boolean,
    /// Exact-match enumeration over the listed values.
    Enum(Arc<[String]>),
}

impl Kind {
    /// Short lowercase name (`string`, `number`, `boolean`, `enum`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Enum(_) => "enum",
        }
    }

    /// Allowed values for [`Kind::Enum`], `None` for other kinds.
    #[must_use]
    pub fn allowed(&self) -> Option<&[String]> {
        match self {
            Self::Enum(values) => Some(&**values),
            _ => None,
        }
    }

    /// Runs this kind's primitive parser on a non-empty raw value.
    ///
    /// # Errors
    ///
    /// Returns the primitive parser's [`ParseError`].
    pub fn parse(&self, raw: &str) -> Result<Value, ParseError> {
        match self {
            Self::String => Ok(Value::String(parse_string(raw))),
            Self::Number => parse_number(raw).map(Value::Number),
            Self::Boolean => parse_boolean(raw).map(Value::Boolean),
            Self::Enum(allowed) => parse_enum(raw, &allowed[..]).map(Value::Enum),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved, typed variable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    /// A member of the field's allowed values.
    Enum(String),
}

impl Value {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Enum(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Enum(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
