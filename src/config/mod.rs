//! Configuration module for k8s_check.
//!
//! All configuration comes from environment variables; the command line only
//! selects the operation and its check type.
//!
//! # Example
//!
//! ```rust,ignore
//! use k8s_check::config::Config;
//!
//! let config = Config::from_env();
//! println!("Lock dir: {}", config.store.lock_dir.display());
//! ```

mod check;
mod error;
mod logging;
mod parse;

pub use check::{CheckCommands, RunnerConfig, StoreConfig, DEFAULT_LOCK_DIR, DEFAULT_SHELL};
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};
pub use parse::{EnvSource, ProcessEnv};

/// Complete application configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Lock storage configuration.
    pub store: StoreConfig,
    /// Command runner configuration.
    pub runner: RunnerConfig,
    /// Health commands per check type.
    pub commands: CheckCommands,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Loading never fails. A missing health command only matters once a
    /// `run` reaches it, and a lock must win even then.
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv)
    }

    /// Load configuration from an arbitrary environment source.
    pub fn from_source(env: &dyn EnvSource) -> Self {
        Self {
            store: StoreConfig::from_env(env),
            runner: RunnerConfig::from_env(env),
            commands: CheckCommands::from_env(env),
            logging: LoggingConfig::from_env(env),
        }
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::debug;

        debug!("Configuration loaded:");
        debug!("  Lock dir: {}", self.store.lock_dir.display());
        debug!("  Shell: {}", self.runner.shell);
        debug!(
            "  LIVENESS_CHECK: {}",
            self.commands.liveness.as_deref().unwrap_or("(unset)")
        );
        debug!(
            "  READINESS_CHECK: {}",
            self.commands.readiness.as_deref().unwrap_or("(unset)")
        );
    }
}
