//! Environment variable handling for settings resolution
//!
//! Helper struct to encapsulate env var lookups plus the naming and casting
//! rules applied to override values.

use serde_json::{Value, json};
use std::sync::Arc;

/// Injectable environment lookup
///
/// Abstracts `std::env::var` so tests can supply deterministic values without
/// mutating real process state.
pub trait EnvSource: Send + Sync {
    /// Look up a variable by exact name, `None` if unset
    fn var(&self, name: &str) -> Option<String>;
}

/// Default [`EnvSource`] backed by the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Handles environment variable lookups for a resolver
pub(crate) struct EnvironmentHandler {
    source: Arc<dyn EnvSource>,
}

impl EnvironmentHandler {
    pub(crate) fn new(source: Arc<dyn EnvSource>) -> Self {
        Self { source }
    }

    pub(crate) fn var(&self, name: &str) -> Option<String> {
        self.source.var(name)
    }
}

/// Get the environment variable name for a package/key pair
///
/// Joins package identifier and key with `_`, replaces every hyphen with an
/// underscore and uppercases the result. Consecutive hyphens produce
/// consecutive underscores (no collapsing).
///
/// # Example
///
/// ```
/// use plugconf::env_var_name;
///
/// assert_eq!(env_var_name("test-package", "a-config-key"), "TEST_PACKAGE_A_CONFIG_KEY");
/// assert_eq!(env_var_name("test-package", "another--key"), "TEST_PACKAGE_ANOTHER__KEY");
/// ```
pub fn env_var_name(package_name: &str, key: &str) -> String {
    format!("{package_name}_{key}")
        .replace('-', "_")
        .to_uppercase()
}

/// Cast an environment string to a boolean, returning `fallback` unchanged
/// when the value is not a recognized boolean spelling
///
/// Case-insensitive: `"false"`, `"no"`, `"0"` are false; `"true"`, `"yes"`,
/// `"1"` are true.
pub fn cast_env_to_bool(value: &str, fallback: Value) -> Value {
    let lowered = value.to_lowercase();
    match lowered.as_str() {
        "false" | "no" | "0" => Value::Bool(false),
        "true" | "yes" | "1" => Value::Bool(true),
        _ => fallback,
    }
}

/// Cast a comma-separated environment string to a list of strings, returning
/// `fallback` unchanged when any split segment is empty
///
/// Order and duplicates are preserved; segments are not trimmed.
pub fn cast_env_to_list(value: &str, fallback: Value) -> Value {
    let items: Vec<&str> = value.split(',').collect();
    if items.iter().any(|item| item.is_empty()) {
        return fallback;
    }
    json!(items)
}

/// Parse the leading integer of an environment string
///
/// Skips leading whitespace, accepts an optional sign, then consumes digits.
/// `None` when no digits are present or the digits overflow `i64`.
pub(crate) fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.strip_prefix(['-', '+']) {
        Some(rest) => (&trimmed[..1], rest),
        None => ("", trimmed),
    };

    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }

    format!("{sign}{digits}").parse().ok()
}

// =============================================================================
// Tests
// =============================================================================
