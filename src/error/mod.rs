// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   parse_*()            FieldSpec::parse()          validate()
//!      |                       |                         |
//!      v                       v                         v
//!  ParseError  --wrapped-->  FieldError  --collected-->  EnvoyError
//!  (message)               Missing/Invalid             (the only error a
//!                          "<KEY> <message>"            caller observes)
//!
//!  schema::file::load()  -->  SchemaError
//! ```

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvoyError`].
pub type EnvoyResult<T> = std::result::Result<T, EnvoyError>;

/// Header line of the aggregated error message.
pub const ERROR_HEADER: &str = "❌ Invalid environment configuration";

// --- Primitive parser errors ---

/// Failure of a primitive parser. Carries only the message text, without a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("must be a number (received \"{received}\")")]
    NotANumber { received: String },

    #[error("must be a boolean (received \"{received}\")")]
    NotABoolean { received: String },

    /// `allowed` is already joined with `", "`.
    #[error("must be one of: {allowed} (received \"{received}\")")]
    NotAllowed { allowed: String, received: String },
}

// --- Field errors ---

/// Per-key resolution failure.
///
/// Always absorbed by the validator and reported through [`EnvoyError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required key is absent or empty.
    #[error("{key} is missing")]
    Missing { key: String },

    /// Key is present but its value was rejected by the parser.
    #[error("{key} {source}")]
    Invalid {
        key: String,
        #[source]
        source: ParseError,
    },
}

impl FieldError {
    /// Name of the key this error belongs to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Missing { key } | Self::Invalid { key, .. } => key,
        }
    }
}

// --- Aggregated error ---

/// Aggregated configuration error listing every failed key in schema order.
///
/// Never constructed with an empty error list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvoyError {
    errors: Box<[FieldError]>,
}

impl EnvoyError {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty(), "EnvoyError requires at least one error");
        Self {
            errors: errors.into_boxed_slice(),
        }
    }

    /// The collected per-key errors, in schema order.
    #[must_use]
    pub const fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Number of keys that failed.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for EnvoyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_errors(&self.errors))
    }
}

impl std::error::Error for EnvoyError {}

/// Render errors as the header, a blank line, then one `- ` bullet per error.
///
/// Returns an empty string for an empty slice.
#[must_use]
pub fn format_errors<E: fmt::Display>(errors: &[E]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(errors.len() + 2);
    lines.push(ERROR_HEADER.to_string());
    lines.push(String::new());
    lines.extend(errors.iter().map(|err| format!("- {err}")));
    lines.join("\n")
}

// --- Schema document errors ---

/// Errors raised while loading a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document could not be read or parsed.
    #[error("failed to load schema '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: config::ConfigError,
    },

    /// An `enum` variable declares no allowed values.
    #[error("variable '{name}' has type enum but no values")]
    MissingValues { name: String },

    /// `values` was given for a variable that is not an enum.
    #[error("variable '{name}' declares values but has type {kind}")]
    UnexpectedValues { name: String, kind: String },

    /// The declared default is not valid for the variable's type.
    #[error("invalid default for '{name}': {source}")]
    InvalidDefault {
        name: String,
        #[source]
        source: ParseError,
    },

    /// The same variable name appears twice.
    #[error("variable '{0}' is declared more than once")]
    Duplicate(String),
}

#[cfg(test)]
mod tests;
