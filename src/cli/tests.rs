// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::{CommandFactory, Parser};
use std::path::Path;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envoy", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_check_with_options() {
    let cli = Cli::try_parse_from([
        "envoy",
        "-l",
        "4",
        "--log-file",
        "logs/envoy.log",
        "check",
        "--schema",
        "config/app.toml",
        "--json",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.log_file.as_deref(), Some(Path::new("logs/envoy.log")));
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.schema, Path::new("config/app.toml"));
    assert!(args.json);
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    let err = Cli::try_parse_from(["envoy", "-l", "7", "version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}
