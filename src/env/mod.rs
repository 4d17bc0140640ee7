// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment snapshots.
//!
//! # Architecture
//!
//! ```text
//! current_env() --> Env (copy-on-write BTreeMap<String, String>)
//!
//! EnvSource (lookup seam used by validate())
//!   Env | BTreeMap<String, String> | HashMap<String, String>
//! ```
//!
//! - **Case-insensitive on Windows**, exact elsewhere
//! - **Point in time**: later changes to the process environment are not seen
//! - **UTF-8 only**: non-UTF-8 names are skipped, non-UTF-8 values are
//!   converted lossily and never reported as unset

pub mod container;
mod types;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::debug;

pub use container::Env;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> Env {
    let mut skipped = 0_usize;
    let env: Env = std::env::vars_os()
        .filter_map(|(name, value)| {
            if let Ok(name) = name.into_string() {
                Some((name, value.to_string_lossy().into_owned()))
            } else {
                skipped += 1;
                None
            }
        })
        .collect();

    debug!(vars = env.len(), skipped, "Captured environment snapshot");
    env
}

/// Read-only lookup of raw environment values by name.
pub trait EnvSource {
    /// Returns the raw value of `key`, or `None` if it is not set.
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl EnvSource for Env {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}
