//! Settings schema types
//!
//! A schema maps setting keys to a [`SettingDescriptor`] carrying the declared
//! type and the compiled-in default. The resolver consults it for every lookup:
//! the declared type drives environment-variable casting, and the default is
//! the lowest-precedence value source.
//!
//! ```rust
//! use plugconf::{schema, SettingDescriptor};
//!
//! let schema = schema! {
//!     "disable-patching" => SettingDescriptor::bool(false),
//!     "patch-depth" => SettingDescriptor::int(1),
//!     "packages" => SettingDescriptor::list(&["vendor/package".to_string()]),
//! };
//! assert_eq!(schema.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Schema for a resolver: setting key -> descriptor
pub type Schema = HashMap<String, SettingDescriptor>;

// =============================================================================
// Setting Types
// =============================================================================

/// Declared type of a setting
///
/// Drives how an environment-variable string is cast during resolution.
/// Manifest values and defaults are never cast.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    /// Plain string, returned verbatim
    #[default]
    String,
    /// Integer, parsed from leading digits
    Int,
    /// Boolean toggle
    Bool,
    /// List of strings, comma-separated in the environment
    List,
}

// =============================================================================
// Setting Descriptor
// =============================================================================

/// Descriptor for a single setting: declared type plus default value
///
/// # Example
///
/// ```
/// use plugconf::{SettingDescriptor, SettingType};
///
/// let timeout = SettingDescriptor::int(30);
/// assert_eq!(timeout.setting_type, SettingType::Int);
///
/// let verbose = SettingDescriptor::bool(false);
/// let name = SettingDescriptor::string("unnamed");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDescriptor {
    /// Declared type (drives env var casting)
    #[serde(rename = "type")]
    pub setting_type: SettingType,

    /// Default value
    pub default: Value,
}

impl SettingDescriptor {
    /// Create a string setting
    pub fn string(default: impl Into<String>) -> Self {
        Self {
            setting_type: SettingType::String,
            default: Value::String(default.into()),
        }
    }

    /// Create an integer setting
    pub fn int(default: i64) -> Self {
        Self {
            setting_type: SettingType::Int,
            default: json!(default),
        }
    }

    /// Create a boolean setting
    pub fn bool(default: bool) -> Self {
        Self {
            setting_type: SettingType::Bool,
            default: Value::Bool(default),
        }
    }

    /// Create a list-of-strings setting
    pub fn list(default: &[String]) -> Self {
        Self {
            setting_type: SettingType::List,
            default: json!(default),
        }
    }
}

// =============================================================================
// Helper Macro
// =============================================================================

/// Macro for building a schema `HashMap` more cleanly
///
/// # Example
/// ```rust
/// use plugconf::{schema, SettingDescriptor};
///
/// let schema = schema! {
///     "theme" => SettingDescriptor::string("dark"),
///     "retries" => SettingDescriptor::int(3),
/// };
/// ```
#[macro_export]
macro_rules! schema {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = std::collections::HashMap::new();
        $(
            map.insert($key.to_string(), $value);
        )*
        map
    }};
}

// =============================================================================
// Tests
// =============================================================================
