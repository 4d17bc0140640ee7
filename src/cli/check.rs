// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `check` command.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Schema document (TOML) describing the expected variables.
    #[arg(
        short = 's',
        long = "schema",
        value_name = "FILE",
        env = "ENVOY_SCHEMA",
        default_value = "envoy.toml"
    )]
    pub schema: PathBuf,

    /// Print the resolved values as a JSON object instead of KEY=value lines.
    #[arg(long)]
    pub json: bool,
}
