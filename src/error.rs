//! Error types for plugconf library

use thiserror::Error;

/// Result type alias for plugconf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for plugconf library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Usage Errors
    // -------------------------------------------------------------------------
    #[error("Settings schema not registered")]
    SchemaNotRegistered,

    #[error("Resolver not configured - call configure() before get_config()")]
    NotConfigured,

    #[error("Setting not found: {0}")]
    SettingNotFound(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to parse setting value: {0}")]
    Parse(String),
}

impl Error {
    /// Check if this error indicates the resolver was used before initialization
    #[must_use]
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Error::SchemaNotRegistered | Error::NotConfigured)
    }

    /// Check if this is a "not found" type error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::SettingNotFound(_))
    }
}
