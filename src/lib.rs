//! k8s_check - Kubernetes-style liveness/readiness checks for processes
//! running outside Kubernetes' probe machinery.
//!
//! The `check` binary is meant to be invoked periodically by a sidecar, an
//! init system, or an `exec` probe:
//!
//! ```text
//! check run    -type <liveness|readiness>
//! check lock   -type <liveness|readiness> -state <success|failure>
//! check unlock -type <liveness|readiness>
//! ```
//!
//! # Architecture
//!
//! - [`cli`] turns arguments into an [`check::Action`]
//! - [`check::Dispatcher`] performs the action against a [`store::LockStore`]
//!   and a [`runner::CommandRunner`] and returns an [`check::Outcome`]
//! - the binary prints the outcome and exits with its code
//!
//! # Example
//!
//! ```rust,no_run
//! use k8s_check::check::{CheckType, Dispatcher};
//! use k8s_check::config::Config;
//! use k8s_check::runner::ShellRunner;
//! use k8s_check::store::FileLockStore;
//!
//! let config = Config::from_env();
//! let dispatcher = Dispatcher::new(
//!     FileLockStore::new(&config.store.lock_dir),
//!     ShellRunner::new(config.runner.shell.clone()),
//!     config.commands.clone(),
//! );
//! let outcome = dispatcher.run(CheckType::Liveness, &mut std::io::stdout());
//! println!("{}", outcome);
//! std::process::exit(outcome.exit_code());
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars), empty when built without git
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod store;

// Re-exports for convenience
pub use check::{Action, CheckState, CheckType, Dispatcher, Outcome};
pub use config::Config;
pub use error::CheckError;
