//! Liveness/readiness checks for processes running outside Kubernetes.
//!
//! Provides two probe types:
//! - **Liveness**: Is the process alive? (restart if failed)
//! - **Readiness**: Can it handle traffic? (remove from LB if failed)
//!
//! A probe either runs its configured shell command and forwards the exit
//! code, or answers from a lock that forces the result.
//!
//! # Usage as an exec probe
//!
//! ```yaml
//! livenessProbe:
//!   exec:
//!     command: ["check", "run", "-type", "liveness"]
//!   periodSeconds: 10
//!
//! readinessProbe:
//!   exec:
//!     command: ["check", "run", "-type", "readiness"]
//!   periodSeconds: 5
//! ```
//!
//! Forcing a result during maintenance:
//!
//! ```text
//! check lock -type readiness -state failure   # drain traffic
//! check unlock -type readiness                # back to the real command
//! ```

mod dispatcher;
mod outcome;
mod types;

pub use dispatcher::Dispatcher;
pub use outcome::{
    Outcome, OutcomeKind, EXIT_FAILURE, EXIT_INTERNAL, EXIT_MALFORMED_LOCK, EXIT_SPAWN_FAILED,
    EXIT_SUCCESS,
};
pub use types::{CheckState, CheckType, ParseError};

/// One requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run(CheckType),
    Lock(CheckType, CheckState),
    Unlock(CheckType),
}

impl Action {
    pub fn check(&self) -> CheckType {
        match *self {
            Action::Run(check) | Action::Lock(check, _) | Action::Unlock(check) => check,
        }
    }
}
