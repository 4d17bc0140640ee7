// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envoy [global options] <command>
//! check [--schema FILE] [--json]
//! version
//! ```

pub mod check;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::check::CheckArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Validate environment variables against a schema.
#[derive(Debug, Parser)]
#[command(
    name = "envoy",
    author,
    version,
    about = "Typed environment variable validation",
    long_about = "envoy-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Checks the current environment against a TOML schema and\n\
                  reports every invalid or missing variable at once.",
    after_help = "SCHEMA FILES:\n\n\
                  A schema is a list of [[var]] tables, each with a `name`, a\n\
                  `type` (string, number, boolean or enum) and optionally\n\
                  `optional = true`, a `default`, and for enums the allowed\n\
                  `values`. The schema path defaults to envoy.toml and can be\n\
                  set with --schema or ENVOY_SCHEMA."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Validates the current environment against a schema.
    Check(CheckArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
