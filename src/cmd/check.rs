// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command implementation.
//!
//! ```text
//! Schema::from_file(--schema) --> validate(schema, current_env())
//!   Ok  --> stdout: KEY=value lines | JSON object
//!   Err --> EnvoyError bubbles up to main (stderr, exit 1)
//! ```

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::cli::check::CheckArgs;
use crate::env::{EnvSource, current_env};
use crate::error::Result;
use crate::schema::Schema;
use crate::validate::{Config, validate};

/// Main handler for the check command.
///
/// # Errors
///
/// Returns an error if the schema cannot be loaded, or the [`EnvoyError`]
/// produced by validation.
///
/// [`EnvoyError`]: crate::error::EnvoyError
pub fn run_check_command(args: &CheckArgs) -> Result<()> {
    let config = check_environment(&args.schema, &current_env())?;
    print!("{}", render_config(&config, args.json)?);
    Ok(())
}

/// Loads the schema at `schema_path` and validates `env` against it.
///
/// # Errors
///
/// Returns a `SchemaError` if the schema cannot be loaded, or an
/// `EnvoyError` if validation fails.
pub fn check_environment<E: EnvSource + ?Sized>(schema_path: &Path, env: &E) -> Result<Config> {
    let schema = Schema::from_file(schema_path)?;
    info!(
        schema = %schema_path.display(),
        vars = schema.len(),
        "Loaded schema"
    );

    let config = validate(&schema, env)?;
    info!(vars = config.len(), "Environment is valid");
    Ok(config)
}

/// Renders a validated configuration for stdout.
///
/// Text output has one `KEY=value` line per set key and a `# KEY is unset`
/// comment for unset optional keys.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_config(config: &Config, json: bool) -> Result<String> {
    if json {
        let mut out =
            serde_json::to_string_pretty(config).context("failed to serialize configuration")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for (key, value) in config.iter() {
        match value {
            Some(value) => writeln!(out, "{key}={value}")?,
            None => writeln!(out, "# {key} is unset")?,
        }
    }
    Ok(out)
}
