//! Result of a dispatched operation.

use std::fmt;

use super::{CheckState, CheckType};
use crate::error::CheckError;
use crate::runner::CommandExit;

pub const EXIT_SUCCESS: i32 = 0;
/// Usage/config errors, forced or executed failure, lock I/O failure.
pub const EXIT_FAILURE: i32 = 1;
/// The shell could not be started.
pub const EXIT_SPAWN_FAILED: i32 = 2;
/// Lock present but its content is not a state.
pub const EXIT_MALFORMED_LOCK: i32 = 254;
pub use crate::runner::EXIT_INTERNAL;

/// What an operation ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    /// `run` answered from a lock.
    Locked(CheckState),
    /// `run` executed the health command.
    Executed(CommandExit),
    /// `lock` stored a state.
    LockWritten(CheckState),
    /// `unlock` finished; `existed` tells whether a lock was removed.
    LockRemoved { existed: bool },
    /// The operation failed with the given exit code.
    Error(i32),
}

/// Typed result of one invocation: a console message plus an exit code.
///
/// Only the binary entry point turns this into a process exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub check: CheckType,
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn locked(check: CheckType, state: CheckState) -> Self {
        let message = format!(
            "{} check locked at {}: {}",
            check.label(),
            state.as_str().to_lowercase(),
            state.exit_code()
        );
        Self {
            check,
            kind: OutcomeKind::Locked(state),
            message,
        }
    }

    pub fn executed(check: CheckType, exit: CommandExit) -> Self {
        let verdict = if exit.is_success() {
            CheckState::Success
        } else {
            CheckState::Failure
        };
        let message = match exit {
            CommandExit::Signal(signal) => format!(
                "{} Piping Exit Status: {} (killed by signal {})",
                verdict,
                exit.exit_code(),
                signal
            ),
            _ => format!("{} Piping Exit Status: {}", verdict, exit.exit_code()),
        };
        Self {
            check,
            kind: OutcomeKind::Executed(exit),
            message,
        }
    }

    pub fn lock_written(check: CheckType, state: CheckState, location: &str) -> Self {
        Self {
            check,
            kind: OutcomeKind::LockWritten(state),
            message: format!("{} check locked to {} ({})", check.label(), state, location),
        }
    }

    pub fn lock_removed(check: CheckType, existed: bool) -> Self {
        let message = if existed {
            format!("{} check unlocked", check.label())
        } else {
            format!("{} check was not locked", check.label())
        };
        Self {
            check,
            kind: OutcomeKind::LockRemoved { existed },
            message,
        }
    }

    pub fn from_error(check: CheckType, err: &CheckError) -> Self {
        Self {
            check,
            kind: OutcomeKind::Error(err.exit_code()),
            message: err.to_string(),
        }
    }

    /// Exit code the process should terminate with.
    pub fn exit_code(&self) -> i32 {
        match &self.kind {
            OutcomeKind::Locked(state) => state.exit_code(),
            OutcomeKind::Executed(exit) => exit.exit_code(),
            OutcomeKind::LockWritten(_) | OutcomeKind::LockRemoved { .. } => EXIT_SUCCESS,
            OutcomeKind::Error(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == EXIT_SUCCESS
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
