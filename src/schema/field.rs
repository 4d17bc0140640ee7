// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field specifications and their typed builders.
//!
//! ```text
//! string() / number() / boolean() / enum_type([..])
//!          |
//!          v
//!      Field<T> --optional()--> Field<T>   (new value, original untouched)
//!          |    --default(v)--> Field<T>
//!          v
//!      FieldSpec { kind, optional, default }
//!          |
//!   parse(raw, key)
//!     raw None | ""  -> default | None (optional) | Missing
//!     raw "..."      -> kind parser, error framed as "<key> <message>"
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use super::value::{Kind, Value};
use crate::error::FieldError;

/// Immutable description of how one variable is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    kind: Kind,
    optional: bool,
    default: Option<Value>,
}

impl FieldSpec {
    /// A required field of the given kind.
    #[must_use]
    pub const fn new(kind: Kind) -> Self {
        Self {
            kind,
            optional: false,
            default: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &Kind {
        &self.kind
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Copy of this spec marked optional. The default, if any, is kept.
    #[must_use]
    pub fn optional(&self) -> Self {
        Self {
            optional: true,
            ..self.clone()
        }
    }

    /// Copy of this spec with `value` as its default.
    ///
    /// The value is used as written; it does not go through the kind's parser.
    #[must_use]
    pub fn with_default(&self, value: Value) -> Self {
        Self {
            default: Some(value),
            ..self.clone()
        }
    }

    /// Resolves the raw value of `key`.
    ///
    /// Absent and empty values are both treated as missing. A missing value
    /// resolves to the default, then to `None` if the field is optional.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Missing`] for a missing required value and
    /// [`FieldError::Invalid`] when the kind's parser rejects `raw`.
    pub fn parse(&self, raw: Option<&str>, key: &str) -> Result<Option<Value>, FieldError> {
        match raw {
            None | Some("") => {
                if let Some(default) = &self.default {
                    Ok(Some(default.clone()))
                } else if self.optional {
                    Ok(None)
                } else {
                    Err(FieldError::Missing {
                        key: key.to_owned(),
                    })
                }
            }
            Some(raw) => self
                .kind
                .parse(raw)
                .map(Some)
                .map_err(|source| FieldError::Invalid {
                    key: key.to_owned(),
                    source,
                }),
        }
    }
}

/// Rust types a [`Field`] can resolve to.
pub trait FieldType {
    /// Converts a default into a [`Value`] of the given kind.
    fn into_value(self, kind: &Kind) -> Value;
}

impl FieldType for String {
    fn into_value(self, kind: &Kind) -> Value {
        match kind {
            Kind::Enum(_) => Value::Enum(self),
            _ => Value::String(self),
        }
    }
}

impl FieldType for f64 {
    fn into_value(self, _kind: &Kind) -> Value {
        Value::Number(self)
    }
}

impl FieldType for bool {
    fn into_value(self, _kind: &Kind) -> Value {
        Value::Boolean(self)
    }
}

/// Typed builder around a [`FieldSpec`].
///
/// `T` is the Rust type of the resolved value and fixes the type accepted
/// by [`Field::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    spec: FieldSpec,
    _marker: PhantomData<fn() -> T>,
}

impl<T: FieldType> Field<T> {
    const fn from_kind(kind: Kind) -> Self {
        Self {
            spec: FieldSpec::new(kind),
            _marker: PhantomData,
        }
    }

    /// New field that resolves to `None` instead of failing when missing.
    #[must_use]
    pub fn optional(&self) -> Self {
        Self {
            spec: self.spec.optional(),
            _marker: PhantomData,
        }
    }

    /// New field that resolves to `value` when missing.
    #[must_use]
    pub fn default(&self, value: impl Into<T>) -> Self {
        let value = value.into().into_value(self.spec.kind());
        Self {
            spec: self.spec.with_default(value),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// See [`FieldSpec::parse`].
    ///
    /// # Errors
    ///
    /// Same as [`FieldSpec::parse`].
    pub fn parse(&self, raw: Option<&str>, key: &str) -> Result<Option<Value>, FieldError> {
        self.spec.parse(raw, key)
    }
}

impl<T> From<Field<T>> for FieldSpec {
    fn from(field: Field<T>) -> Self {
        field.spec
    }
}

impl<T> From<&Field<T>> for FieldSpec {
    fn from(field: &Field<T>) -> Self {
        field.spec.clone()
    }
}

/// A string field.
#[must_use]
pub const fn string() -> Field<String> {
    Field::from_kind(Kind::String)
}

/// A numeric field.
#[must_use]
pub const fn number() -> Field<f64> {
    Field::from_kind(Kind::Number)
}

/// A boolean field (`true`/`1`, `false`/`0`).
#[must_use]
pub const fn boolean() -> Field<bool> {
    Field::from_kind(Kind::Boolean)
}

/// An enumeration field accepting exactly the given values.
#[must_use]
pub fn enum_type<I, S>(values: I) -> Field<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Arc<[String]> = values.into_iter().map(Into::into).collect();
    Field::from_kind(Kind::Enum(allowed))
}
