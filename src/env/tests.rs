// envoy-rs: Typed environment validation
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::{EnvSource, current_env};
use crate::env::container::Env;
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.len(), 1);
    assert!(!env.is_empty());

    env.remove("FOO");
    assert!(env.is_empty());
}

#[test]
fn test_env_key_case() {
    let env = Env::new().with("Path", "/usr/bin");
    if cfg!(windows) {
        assert_eq!(env.get("PATH"), Some("/usr/bin"));
    } else {
        assert_eq!(env.get("PATH"), None);
        assert_eq!(env.get("Path"), Some("/usr/bin"));
    }
}

#[test]
fn test_env_copy_on_write() {
    let env1 = Env::new().with("KEY1", "value1");

    let mut env2 = env1.clone();
    assert!(env1.shares_data_with(&env2));

    env2.set("KEY2", "value2");
    assert!(!env1.shares_data_with(&env2));

    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("value1"));
    assert_eq!(env2.get("KEY2"), Some("value2"));
}

#[test]
fn test_env_from_map_roundtrip() {
    let mut map = BTreeMap::new();
    map.insert("B".to_string(), "2".to_string());
    map.insert("A".to_string(), "1".to_string());

    let env = Env::from_map(map.clone());
    assert_eq!(env.to_map(), map);

    let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["A", "B"]);
}

#[test]
fn test_env_source_impls() {
    fn lookup_port<E: EnvSource>(source: &E) -> Option<String> {
        source.lookup("PORT").map(str::to_owned)
    }

    let env = Env::new().with("PORT", "3000");
    let btree: BTreeMap<_, _> = [("PORT".to_string(), "3000".to_string())].into();
    let hash: HashMap<_, _> = [("PORT".to_string(), "3000".to_string())].into();

    assert_eq!(lookup_port(&env).as_deref(), Some("3000"));
    assert_eq!(lookup_port(&btree).as_deref(), Some("3000"));
    assert_eq!(lookup_port(&hash).as_deref(), Some("3000"));
    assert_eq!(lookup_port(&&env).as_deref(), Some("3000"));
}

#[test]
fn test_current_env_matches_process() {
    let env = current_env();
    for (key, value) in std::env::vars() {
        assert_eq!(env.get(&key), Some(value.as_str()), "{key}");
    }
}
