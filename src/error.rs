//! Crate-level error type and its exit code mapping.

use std::fmt;

use crate::check::{EXIT_FAILURE, EXIT_MALFORMED_LOCK, EXIT_SPAWN_FAILED};
use crate::config::ConfigError;
use crate::runner::SpawnError;
use crate::store::StoreError;

/// Errors that end an invocation.
#[derive(Debug)]
pub enum CheckError {
    /// Command-line usage error.
    Usage(String),

    /// Missing or invalid configuration.
    Config(ConfigError),

    /// Lock exists but does not hold a valid state.
    MalformedLock { location: String, content: String },

    /// Lock exists but could not be read.
    UnreadableLock(StoreError),

    /// Writing or removing a lock failed.
    Store(StoreError),

    /// The shell could not be started.
    Spawn(SpawnError),
}

impl CheckError {
    /// Exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::Usage(_) | CheckError::Config(_) | CheckError::Store(_) => EXIT_FAILURE,
            CheckError::MalformedLock { .. } | CheckError::UnreadableLock(_) => {
                EXIT_MALFORMED_LOCK
            }
            CheckError::Spawn(_) => EXIT_SPAWN_FAILED,
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Usage(msg) => write!(f, "{}", msg),
            CheckError::Config(e) => write!(f, "{}", e),
            CheckError::MalformedLock { location, content } => {
                write!(f, "Invalid value in file {}: {:?}", location, content)
            }
            CheckError::UnreadableLock(e) => write!(f, "Invalid lock: {}", e),
            CheckError::Store(e) => write!(f, "{}", e),
            CheckError::Spawn(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Config(e) => Some(e),
            CheckError::UnreadableLock(e) | CheckError::Store(e) => Some(e),
            CheckError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CheckError {
    fn from(e: ConfigError) -> Self {
        CheckError::Config(e)
    }
}

impl From<StoreError> for CheckError {
    fn from(e: StoreError) -> Self {
        CheckError::Store(e)
    }
}

impl From<SpawnError> for CheckError {
    fn from(e: SpawnError) -> Self {
        CheckError::Spawn(e)
    }
}

/// Result type alias for dispatcher operations.
pub type Result<T> = std::result::Result<T, CheckError>;
