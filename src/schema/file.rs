// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schema documents in TOML.
//!
//! # Document Layout
//!
//! ```toml
//! [[var]]
//! name = "PORT"
//! type = "number"      # string | number | boolean | enum
//! default = 8080
//!
//! [[var]]
//! name = "NODE_ENV"
//! type = "enum"
//! values = ["development", "production", "test"]
//! optional = true
//! ```
//!
//! `[[var]]` is an array of tables, so declaration order survives loading.
//! Defaults are run through the variable's own parser, which also checks
//! enum defaults against `values`.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use super::{FieldSpec, Kind, Schema};
use crate::error::SchemaError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SchemaDocument {
    var: Vec<VarDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VarDecl {
    name: String,
    #[serde(rename = "type")]
    kind: KindName,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    default: Option<DefaultLiteral>,
    #[serde(default)]
    values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KindName {
    String,
    Number,
    Boolean,
    Enum,
}

impl KindName {
    const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
        }
    }
}

/// A TOML default, before it is checked against the variable's kind.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DefaultLiteral {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl DefaultLiteral {
    fn to_raw(&self) -> String {
        match self {
            Self::Boolean(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl VarDecl {
    fn into_field(self) -> Result<(String, FieldSpec), SchemaError> {
        let kind = match (self.kind, self.values) {
            (KindName::Enum, Some(values)) if !values.is_empty() => {
                Kind::Enum(Arc::from(values))
            }
            (KindName::Enum, _) => return Err(SchemaError::MissingValues { name: self.name }),
            (kind, Some(_)) => {
                return Err(SchemaError::UnexpectedValues {
                    name: self.name,
                    kind: kind.as_str().to_string(),
                });
            }
            (KindName::String, None) => Kind::String,
            (KindName::Number, None) => Kind::Number,
            (KindName::Boolean, None) => Kind::Boolean,
        };

        let mut spec = FieldSpec::new(kind);
        if self.optional {
            spec = spec.optional();
        }
        if let Some(literal) = &self.default {
            let value = spec.kind().parse(&literal.to_raw()).map_err(|source| {
                SchemaError::InvalidDefault {
                    name: self.name.clone(),
                    source,
                }
            })?;
            spec = spec.with_default(value);
        }

        Ok((self.name, spec))
    }
}

impl SchemaDocument {
    fn into_schema(self) -> Result<Schema, SchemaError> {
        let mut schema = Schema::new();
        for decl in self.var {
            let (name, spec) = decl.into_field()?;
            if schema.contains_key(&name) {
                return Err(SchemaError::Duplicate(name));
            }
            schema.insert(name, spec);
        }
        Ok(schema)
    }
}

fn load(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    label: String,
) -> Result<Schema, SchemaError> {
    let document: SchemaDocument = builder
        .build()
        .and_then(config::Config::try_deserialize)
        .map_err(|source| SchemaError::Load {
            path: label,
            source,
        })?;

    document.into_schema()
}

impl Schema {
    /// Loads a schema from a TOML document on disk.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] if the file is missing or malformed, or
    /// another [`SchemaError`] for an invalid declaration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        use config::{File, FileFormat};
        let path = path.as_ref();
        let builder = config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        load(builder, path.display().to_string())
    }

    /// Loads a schema from a TOML string.
    ///
    /// # Errors
    ///
    /// Same as [`Schema::from_file`].
    pub fn from_toml_str(content: &str) -> Result<Self, SchemaError> {
        use config::{File, FileFormat};
        let builder =
            config::Config::builder().add_source(File::from_str(content, FileFormat::Toml));
        load(builder, "<string>".to_string())
    }
}
