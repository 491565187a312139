//! # plugconf - Plugin Config Resolution
//!
//! A generic, framework-agnostic Rust library for resolving plugin settings
//! from a declared schema, a parsed manifest section and environment-variable
//! overrides.
//!
//! ## Features
//!
//! - **Schema Defaults**: Declare each setting's type and default once
//! - **Manifest Values**: Read per-package sections from an externally parsed config
//! - **Environment Overrides**: Canonical env var names derived from package + key
//! - **Lenient Casting**: Malformed env values degrade to defaults, never crash the host
//! - **Injectable Environment**: Swap the env lookup in tests via [`EnvSource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use plugconf::{ConfigResolver, SettingDescriptor, schema};
//! use serde_json::json;
//!
//! let mut resolver = ConfigResolver::new().with_schema(schema! {
//!     "disable-patching" => SettingDescriptor::bool(false),
//!     "patch-depth" => SettingDescriptor::int(1),
//!     "ignored-packages" => SettingDescriptor::list(&[]),
//! });
//!
//! // The host plugin hands over its parsed manifest and package identifier
//! resolver.configure(
//!     json!({
//!         "vendor-patches": {
//!             "patch-depth": 3,
//!         }
//!     }),
//!     "vendor-patches",
//! );
//!
//! let depth: i64 = resolver.get("patch-depth")?;
//! assert_eq!(depth, 3);
//!
//! // Unset keys fall back to schema defaults
//! let disabled: bool = resolver.get("disable-patching")?;
//! assert!(!disabled);
//! # Ok::<(), plugconf::Error>(())
//! ```
//!
//! ## Resolution Precedence
//!
//! For every `get_config` call, highest first:
//!
//! 1. Environment variable `VENDOR_PATCHES_PATCH_DEPTH` (cast to the declared type)
//! 2. Manifest value `raw_config["vendor-patches"]["patch-depth"]` (as-is)
//! 3. Schema default
//!
//! Nothing is cached; each call re-reads the environment and stored config.
//!
//! ## Embedding in a Host Plugin
//!
//! The resolver is a standalone component a host type holds as a field:
//!
//! ```rust
//! use plugconf::{ConfigResolver, SettingDescriptor, schema};
//! use serde_json::json;
//!
//! struct PatcherPlugin {
//!     config: ConfigResolver,
//! }
//!
//! impl PatcherPlugin {
//!     fn activate(manifest: serde_json::Value) -> Self {
//!         let mut config = ConfigResolver::new().with_schema(schema! {
//!             "patch-depth" => SettingDescriptor::int(1),
//!         });
//!         config.configure(manifest, "vendor/patches");
//!         Self { config }
//!     }
//! }
//!
//! let plugin = PatcherPlugin::activate(json!({}));
//! assert_eq!(plugin.config.get::<i64>("patch-depth").unwrap(), 1);
//! ```

// Core modules
mod error;
mod resolver;
mod schema;

// Re-exports from core
pub use error::{Error, Result};
pub use resolver::{
    ConfigResolver, EnvSource, ProcessEnv, cast_env_to_bool, cast_env_to_list, env_var_name,
};
pub use schema::{Schema, SettingDescriptor, SettingType};
