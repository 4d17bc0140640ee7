// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schema definition.
//!
//! # Building a Schema
//!
//! ```text
//! Schema::new()                         schema! {
//!   .field("PORT", number())              PORT: number().default(8080),
//!   .field("DEBUG", boolean())    ==      DEBUG: boolean(),
//!                                       }
//! ```
//!
//! Keys are unique. Re-adding a key replaces its field but keeps its
//! original position, so validation errors are always reported in the
//! order keys were first declared.
//!
//! Schemas can also be loaded from TOML documents, see [`file`].

mod field;
pub mod file;
mod value;


pub use field::{Field, FieldSpec, FieldType, boolean, enum_type, number, string};
pub use value::{Kind, Value};

/// Ordered mapping of variable names to field specs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, FieldSpec)>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builder-style [`Schema::insert`].
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.insert(key, spec);
        self
    }

    /// Adds a field, returning the spec it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        spec: impl Into<FieldSpec>,
    ) -> Option<FieldSpec> {
        let key = key.into();
        let spec = spec.into();

        if let Some((_, existing)) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, spec));
        }
        self.fields.push((key, spec));
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find_map(|(k, spec)| (k == key).then_some(spec))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(k, spec)| (k.as_str(), spec))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, F> FromIterator<(K, F)> for Schema
where
    K: Into<String>,
    F: Into<FieldSpec>,
{
    fn from_iter<I: IntoIterator<Item = (K, F)>>(iter: I) -> Self {
        let mut schema = Self::new();
        for (key, spec) in iter {
            schema.insert(key, spec);
        }
        schema
    }
}

/// Builds a [`Schema`] from `KEY: field` pairs, keeping their order.
///
/// # Example
///
/// ```
/// use envoy_rs::schema;
/// use envoy_rs::schema::{boolean, enum_type, number, string};
///
/// let schema = schema! {
///     PORT: number().default(8080),
///     NODE_ENV: enum_type(["development", "production", "test"]),
///     DEBUG: boolean().optional(),
///     API_URL: string(),
/// };
/// assert_eq!(schema.len(), 4);
/// ```
#[macro_export]
macro_rules! schema {
    ($($key:ident : $field:expr),* $(,)?) => {
        $crate::schema::Schema::new()
            $(.field(stringify!($key), $field))*
    };
}
