//! Configuration resolver module
//!
//! This module contains the [`ConfigResolver`] struct which is the primary
//! entry point for resolving plugin settings from the environment, a manifest
//! section and schema defaults.

mod env;

pub use env::{EnvSource, ProcessEnv, cast_env_to_bool, cast_env_to_list, env_var_name};

use crate::error::{Error, Result};
use crate::schema::{Schema, SettingType};
use env::EnvironmentHandler;
use log::debug;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves effective setting values for a host plugin.
///
/// The resolver merges three value sources with defined precedence, highest
/// first:
///
/// 1. **Environment variable** named after the package identifier and key
///    (see [`env_var_name`]), cast to the schema's declared type
/// 2. **Manifest value** from `raw_config[package][key]`, returned as-is
/// 3. **Schema default**
///
/// Resolution is recomputed on every [`get_config`](Self::get_config) call;
/// nothing is cached. The resolver owns no I/O: the raw config is supplied by
/// the host's manifest parser and environment access goes through an
/// injectable [`EnvSource`].
///
/// # Example
///
/// ```rust
/// use plugconf::{ConfigResolver, SettingDescriptor, schema};
/// use serde_json::json;
///
/// let mut resolver = ConfigResolver::new().with_schema(schema! {
///     "disable-patching" => SettingDescriptor::bool(false),
/// });
/// resolver.configure(json!({"vendor/patches": {"disable-patching": true}}), "vendor/patches");
///
/// let disabled: bool = resolver.get("disable-patching")?;
/// assert!(disabled);
/// # Ok::<(), plugconf::Error>(())
/// ```
pub struct ConfigResolver {
    /// Declared settings, supplied once before resolution
    schema: Option<Schema>,

    /// Raw config and package identifier, stored by `configure`
    state: Option<ResolverState>,

    /// Environment lookups (injectable for tests)
    env: EnvironmentHandler,
}

struct ResolverState {
    raw_config: Value,
    package_name: String,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Create an unconfigured resolver reading the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: None,
            state: None,
            env: EnvironmentHandler::new(Arc::new(ProcessEnv)),
        }
    }

    /// Set the settings schema (builder style).
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Replace the environment source (builder style).
    ///
    /// Tests inject a deterministic source here instead of mutating real
    /// process state.
    #[must_use]
    pub fn with_env_source(mut self, source: Arc<dyn EnvSource>) -> Self {
        self.env = EnvironmentHandler::new(source);
        self
    }

    /// Set the settings schema.
    pub fn set_schema(&mut self, schema: Schema) {
        self.schema = Some(schema);
    }

    /// Store the raw configuration and package identifier for later lookups.
    ///
    /// Must be called before [`get_config`](Self::get_config). The raw config
    /// is the parsed manifest: an object mapping package identifiers to
    /// per-key sections. The package identifier may be empty; that degrades
    /// environment-variable naming but is not an error.
    pub fn configure(&mut self, raw_config: Value, package_name: impl Into<String>) {
        let package_name = package_name.into();
        debug!("Resolver configured for package '{package_name}'");
        self.state = Some(ResolverState {
            raw_config,
            package_name,
        });
    }

    /// Check whether `configure` has been called.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.state.is_some()
    }

    /// Check whether a key is declared in the schema.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.schema
            .as_ref()
            .is_some_and(|schema| schema.contains_key(key))
    }

    /// All declared setting keys, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.schema
            .as_ref()
            .map(|schema| schema.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Get the environment variable name for a setting key, using the
    /// configured package identifier.
    ///
    /// # Errors
    ///
    /// [`Error::NotConfigured`] if `configure` has not been called.
    pub fn env_var_name(&self, key: &str) -> Result<String> {
        let state = self.state.as_ref().ok_or(Error::NotConfigured)?;
        Ok(env_var_name(&state.package_name, key))
    }

    /// Resolve the effective value for a setting key.
    ///
    /// Re-reads the environment and the stored raw config on every call.
    ///
    /// # Errors
    ///
    /// - [`Error::SchemaNotRegistered`] if no schema has been set
    /// - [`Error::NotConfigured`] if `configure` has not been called
    /// - [`Error::SettingNotFound`] if `key` is not declared in the schema
    ///
    /// Malformed environment values are never an error: they degrade to the
    /// schema default for the key.
    pub fn get_config(&self, key: &str) -> Result<Value> {
        let schema = self.schema.as_ref().ok_or(Error::SchemaNotRegistered)?;
        let state = self.state.as_ref().ok_or(Error::NotConfigured)?;
        let descriptor = schema
            .get(key)
            .ok_or_else(|| Error::SettingNotFound(key.to_string()))?;

        // Priority: env var > manifest value > default
        let var_name = env_var_name(&state.package_name, key);
        if let Some(env_value) = self.env.var(&var_name) {
            debug!("Setting {key} overridden by env var {var_name}");
            return Ok(cast_env_value(
                descriptor.setting_type,
                &env_value,
                &descriptor.default,
            ));
        }

        if let Some(manifest_value) = state
            .raw_config
            .get(&state.package_name)
            .and_then(|section| section.get(key))
        {
            return Ok(manifest_value.clone());
        }

        Ok(descriptor.default.clone())
    }

    /// Resolve the effective value for a setting key and deserialize it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plugconf::{ConfigResolver, SettingDescriptor, schema};
    /// use serde_json::json;
    ///
    /// let mut resolver = ConfigResolver::new().with_schema(schema! {
    ///     "patch-depth" => SettingDescriptor::int(1),
    /// });
    /// resolver.configure(json!({}), "vendor/patches");
    ///
    /// let depth: i64 = resolver.get("patch-depth")?;
    /// assert_eq!(depth, 1);
    /// # Ok::<(), plugconf::Error>(())
    /// ```
    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.get_config(key)?;
        serde_json::from_value(value).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Resolve every declared key in one pass.
    ///
    /// Each entry goes through the same env > manifest > default precedence
    /// as [`get_config`](Self::get_config).
    pub fn resolve_all(&self) -> Result<HashMap<String, Value>> {
        let schema = self.schema.as_ref().ok_or(Error::SchemaNotRegistered)?;

        let mut resolved = HashMap::with_capacity(schema.len());
        for key in schema.keys() {
            resolved.insert(key.clone(), self.get_config(key)?);
        }
        Ok(resolved)
    }
}

/// Cast a raw environment string according to the declared setting type.
///
/// Unparseable values fall back to the schema default rather than erroring,
/// so garbage environment input only ever degrades to defaults.
fn cast_env_value(setting_type: SettingType, raw: &str, default: &Value) -> Value {
    match setting_type {
        SettingType::String => Value::String(raw.to_string()),
        SettingType::Int => match env::parse_leading_int(raw) {
            Some(n) => json!(n),
            None => {
                debug!("Env value '{raw}' is not an integer, using default");
                default.clone()
            }
        },
        SettingType::Bool => cast_env_to_bool(raw, default.clone()),
        SettingType::List => cast_env_to_list(raw, default.clone()),
    }
}

// =============================================================================
// Tests
// =============================================================================
