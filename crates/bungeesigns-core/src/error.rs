//! Error types for the BungeeSigns configuration layer
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the configuration layer
#[derive(Error, Debug)]
pub enum Error {
    /// Structural configuration errors (wrong section type, bad key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A server address that is not `host:port`
    #[error("Invalid address for server '{server}': {address}")]
    InvalidAddress {
        /// Server entry name
        server: String,
        /// The offending address value
        address: String,
    },

    /// A key the document must contain is absent
    #[error("Missing key '{0}'")]
    MissingKey(String),

    /// A sign entry that cannot be encoded or decoded
    #[error("Invalid sign entry: {0}")]
    InvalidSign(String),

    /// A sign is already bound at this location
    #[error("A sign already exists at {0}")]
    SignExists(String),

    /// The documents have not been loaded yet
    #[error("Configuration is not loaded")]
    NotLoaded,

    /// Writing a document back to its backing store failed
    #[error("Failed to persist {document}: {message}")]
    Persist {
        /// Document file name
        document: &'static str,
        /// Error message
        message: String,
    },

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid address error
    pub fn invalid_address(server: impl Into<String>, address: impl Into<String>) -> Self {
        Self::InvalidAddress {
            server: server.into(),
            address: address.into(),
        }
    }

    /// Create a missing key error
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey(key.into())
    }

    /// Create an invalid sign error
    pub fn invalid_sign(msg: impl Into<String>) -> Self {
        Self::InvalidSign(msg.into())
    }

    /// Create a persistence error
    pub fn persist(document: &'static str, message: impl Into<String>) -> Self {
        Self::Persist {
            document,
            message: message.into(),
        }
    }

    /// Whether this error came from writing a document
    pub fn is_persist(&self) -> bool {
        matches!(self, Self::Persist { .. } | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::invalid_address("lobby", "10.0.0.1");
        assert_eq!(
            err.to_string(),
            "Invalid address for server 'lobby': 10.0.0.1"
        );

        let err = Error::missing_key("servers.lobby.address");
        assert_eq!(err.to_string(), "Missing key 'servers.lobby.address'");

        let err = Error::persist("signs.yml", "disk full");
        assert!(err.is_persist());
        assert_eq!(err.to_string(), "Failed to persist signs.yml: disk full");
    }
}
