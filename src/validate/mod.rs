// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validation entry points.
//!
//! ```text
//! validate(&Schema, &impl EnvSource)
//!   for (key, spec) in schema          (declaration order)
//!     spec.parse(env.lookup(key), key)
//!       Ok  --> values[key]
//!       Err --> errors.push()           (never stops early)
//!   errors.is_empty()
//!     yes --> Ok(Config)                (immutable)
//!     no  --> Err(EnvoyError)           (no partial result)
//!
//! envoy(&Schema) = validate(schema, &current_env())
//! ```

mod resolved;


use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::env::{EnvSource, current_env};
use crate::error::{EnvoyError, EnvoyResult};
use crate::schema::Schema;

pub use resolved::Config;

/// Validates every schema key against `env`.
///
/// # Errors
///
/// Returns an [`EnvoyError`] listing every failed key, in schema order, if
/// at least one key failed.
///
/// # Example
///
/// ```
/// use envoy_rs::env::Env;
/// use envoy_rs::schema::{number, string};
/// use envoy_rs::{schema, validate};
///
/// let env = Env::new().with("PORT", "3000");
/// let config = validate(
///     &schema! { PORT: number(), REGION: string().default("us-east-1") },
///     &env,
/// )?;
///
/// assert_eq!(config.number("PORT"), Some(3000.0));
/// assert_eq!(config.string("REGION"), Some("us-east-1"));
/// # Ok::<(), envoy_rs::EnvoyError>(())
/// ```
pub fn validate<E: EnvSource + ?Sized>(schema: &Schema, env: &E) -> EnvoyResult<Config> {
    let mut values = BTreeMap::new();
    let mut errors = Vec::new();

    for (key, spec) in schema.iter() {
        match spec.parse(env.lookup(key), key) {
            Ok(value) => {
                debug!(key, kind = %spec.kind(), set = value.is_some(), "Resolved variable");
                values.insert(key.to_owned(), value);
            }
            Err(err) => {
                debug!(key, kind = %spec.kind(), "Variable failed validation");
                errors.push(err);
            }
        }
    }

    if !errors.is_empty() {
        warn!(
            failed = errors.len(),
            total = schema.len(),
            "Invalid environment configuration"
        );
        return Err(EnvoyError::new(errors));
    }

    Ok(Config::new(values))
}

/// Validates `schema` against a snapshot of the current process environment.
///
/// # Errors
///
/// Same as [`validate`].
pub fn envoy(schema: &Schema) -> EnvoyResult<Config> {
    validate(schema, &current_env())
}
