//! Environment variable parsing utilities.

use std::collections::HashMap;

/// Source of environment variables.
///
/// Configuration is read through this trait so tests can supply a map
/// instead of mutating the process environment.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }
}

/// Get environment variable with default value (empty counts as missing).
pub fn env_or(env: &dyn EnvSource, key: &str, default: &str) -> String {
    env_opt(env, key).unwrap_or_else(|| default.to_string())
}

/// Get optional environment variable (None if empty or missing).
pub fn env_opt(env: &dyn EnvSource, key: &str) -> Option<String> {
    env.var(key).filter(|s| !s.is_empty())
}
