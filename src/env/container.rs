// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment snapshot with copy-on-write sharing.
//!
//! ```text
//! Env (copy-on-write)
//! data: Arc<EnvData>
//! clone shares Arc until the first set()/remove()
//! ```

use super::types::{EnvData, EnvKey};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A point-in-time set of environment variables.
///
/// Cloning is cheap: copies share data until one of them is modified.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    data: Arc<EnvData>,
}

impl Env {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        vars.into_iter().collect()
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.data)
            .vars_mut()
            .insert(EnvKey::new(key), value.into());
        self
    }

    /// Builder-style [`Env::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets a variable's value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .vars()
            .get(&EnvKey::new(key))
            .map(String::as_str)
    }

    /// Removes a variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.get(key).is_some() {
            Arc::make_mut(&mut self.data)
                .vars_mut()
                .remove(&EnvKey::new(key));
        }
        self
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .vars()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.vars().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.vars().len()
    }

    /// Whether two snapshots share the same storage.
    #[must_use]
    pub fn shares_data_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (EnvKey::new(k), v.into()))
            .collect();
        Self {
            data: Arc::new(EnvData::from_vars(vars)),
        }
    }
}
