//! Check-related configuration: lock location, shell, and health commands.

use std::path::PathBuf;

use super::parse::{env_opt, env_or, EnvSource};
use super::ConfigError;
use crate::check::CheckType;

/// Default directory for lock files.
pub const DEFAULT_LOCK_DIR: &str = "/tmp";

/// Default shell used to run health commands.
pub const DEFAULT_SHELL: &str = "sh";

/// Where locks are persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding `liveness.lock` / `readiness.lock` (CHECK_LOCK_DIR).
    pub lock_dir: PathBuf,
}

impl StoreConfig {
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            lock_dir: PathBuf::from(env_or(env, "CHECK_LOCK_DIR", DEFAULT_LOCK_DIR)),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            lock_dir: PathBuf::from(DEFAULT_LOCK_DIR),
        }
    }
}

/// How health commands are executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Shell interpreter invoked as `<shell> -c <command>` (CHECK_SHELL).
    pub shell: String,
}

impl RunnerConfig {
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            shell: env_or(env, "CHECK_SHELL", DEFAULT_SHELL),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

/// Shell commands per check type (LIVENESS_CHECK / READINESS_CHECK).
///
/// Empty values count as unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckCommands {
    pub liveness: Option<String>,
    pub readiness: Option<String>,
}

impl CheckCommands {
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            liveness: env_opt(env, CheckType::Liveness.command_env()),
            readiness: env_opt(env, CheckType::Readiness.command_env()),
        }
    }

    /// Command configured for the check, if any.
    pub fn get(&self, check: CheckType) -> Option<&str> {
        match check {
            CheckType::Liveness => self.liveness.as_deref(),
            CheckType::Readiness => self.readiness.as_deref(),
        }
    }

    /// Command for the check, or a `Missing` error naming its variable.
    pub fn require(&self, check: CheckType) -> Result<&str, ConfigError> {
        self.get(check).ok_or_else(|| ConfigError::Missing {
            key: check.command_env().to_string(),
        })
    }

    pub fn with(mut self, check: CheckType, command: impl Into<String>) -> Self {
        let command: Option<String> = Some(command.into()).filter(|c| !c.is_empty());
        match check {
            CheckType::Liveness => self.liveness = command,
            CheckType::Readiness => self.readiness = command,
        }
        self
    }
}
