//! Configuration error types.

use std::fmt;

/// Error type for configuration lookups.
#[derive(Debug)]
pub enum ConfigError {
    /// Missing required environment variable.
    Missing { key: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing { key } => write!(f, "env {} must be set", key),
        }
    }
}

impl std::error::Error for ConfigError {}
