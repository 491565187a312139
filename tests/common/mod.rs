//! Common test utilities for plugconf integration tests
//!
//! Provides a deterministic environment source and a shared settings schema.

#![allow(dead_code)]

use plugconf::{EnvSource, Schema, SettingDescriptor, schema};
use std::collections::HashMap;
use std::sync::Mutex;

/// Environment source backed by an in-memory map.
///
/// Lets tests exercise env-var precedence without mutating real process
/// state, so they stay parallel-safe.
#[derive(Default)]
pub struct FakeEnv {
    vars: Mutex<HashMap<String, String>>,
}

impl FakeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: &str, value: &str) {
        self.vars
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove(&self, name: &str) {
        self.vars.lock().unwrap().remove(name);
    }
}

impl EnvSource for FakeEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.lock().unwrap().get(name).cloned()
    }
}

/// A schema covering all four setting types
pub fn full_schema() -> Schema {
    schema! {
        "string-val" => SettingDescriptor::string("asdf"),
        "int-val" => SettingDescriptor::int(123),
        "bool-val" => SettingDescriptor::bool(true),
        "list-val" => SettingDescriptor::list(&["asdf".to_string()]),
    }
}
