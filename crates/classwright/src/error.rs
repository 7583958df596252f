//! Model and configuration errors
//!
//! Builders never fail. Errors only come from validating value types
//! (symbol names, type names, modifier keywords) and from loading
//! configuration.

use thiserror::Error;

/// Errors raised while constructing model value types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A symbol name is not a legal identifier
    #[error("Invalid symbol name '{name}': {reason}")]
    InvalidSymbolName {
        /// Offending name
        name: String,
        /// Why the name was rejected
        reason: String,
    },

    /// A symbol name collides with a reserved word
    #[error("Symbol name '{name}' is a reserved word")]
    ReservedWord {
        /// Offending name
        name: String,
    },

    /// A fully qualified type name is malformed
    #[error("Invalid type name '{name}': {reason}")]
    InvalidTypeName {
        /// Offending name
        name: String,
        /// Why the name was rejected
        reason: String,
    },

    /// A modifier keyword is not recognised
    #[error("Unknown modifier: {name}")]
    UnknownModifier {
        /// Offending keyword
        name: String,
    },
}

/// Errors raised while loading a [`ModelConfig`](crate::ModelConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A configured value is not a valid model value
    #[error("Invalid config: {0}")]
    Model(#[from] ModelError),
}
