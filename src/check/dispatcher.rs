//! Check dispatcher: run, lock and unlock.

use std::io::Write;

use tracing::{debug, error, info, warn};

use super::{Action, CheckState, CheckType, Outcome};
use crate::config::CheckCommands;
use crate::error::{CheckError, Result};
use crate::runner::CommandRunner;
use crate::store::LockStore;

/// Resolves check types to locks and commands and performs one action.
///
/// Every operation ends in an [`Outcome`]; nothing here exits the process.
pub struct Dispatcher<S, R> {
    store: S,
    runner: R,
    commands: CheckCommands,
}

impl<S: LockStore, R: CommandRunner> Dispatcher<S, R> {
    pub fn new(store: S, runner: R, commands: CheckCommands) -> Self {
        Self {
            store,
            runner,
            commands,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Perform an action. `out` receives progress lines printed before the
    /// health command runs.
    pub fn dispatch(&self, action: Action, out: &mut dyn Write) -> Outcome {
        match action {
            Action::Run(check) => self.run(check, out),
            Action::Lock(check, state) => self.lock(check, state),
            Action::Unlock(check) => self.unlock(check),
        }
    }

    /// Report the locked state if a lock exists, otherwise run the
    /// configured command and forward its exit status.
    pub fn run(&self, check: CheckType, out: &mut dyn Write) -> Outcome {
        self.try_run(check, out)
            .unwrap_or_else(|e| Self::failed(check, "run", e))
    }

    /// Force the check to `state` until unlocked.
    pub fn lock(&self, check: CheckType, state: CheckState) -> Outcome {
        match self.store.write(check, state) {
            Ok(()) => {
                let location = self.store.location(check);
                info!(check = %check, state = %state, path = %location, "Check locked");
                Outcome::lock_written(check, state, &location)
            }
            Err(e) => Self::failed(check, "lock", e.into()),
        }
    }

    /// Remove the check's lock; a missing lock is not an error.
    pub fn unlock(&self, check: CheckType) -> Outcome {
        match self.store.remove(check) {
            Ok(existed) => {
                info!(check = %check, existed, "Check unlocked");
                Outcome::lock_removed(check, existed)
            }
            Err(e) => Self::failed(check, "unlock", e.into()),
        }
    }

    fn try_run(&self, check: CheckType, out: &mut dyn Write) -> Result<Outcome> {
        if let Some(state) = self.locked_state(check)? {
            debug!(check = %check, state = %state, "Answering from lock");
            return Ok(Outcome::locked(check, state));
        }

        let command = self.commands.require(check)?;

        let _ = writeln!(out, "Executing {}", command);
        let _ = out.flush();

        debug!(check = %check, command, "Running health command");
        let exit = self.runner.run(command)?;
        debug!(check = %check, exit_code = exit.exit_code(), "Health command finished");

        Ok(Outcome::executed(check, exit))
    }

    fn locked_state(&self, check: CheckType) -> Result<Option<CheckState>> {
        let content = match self.store.read(check) {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(None),
            Err(e) => return Err(CheckError::UnreadableLock(e)),
        };

        // Tolerate a trailing newline from `echo SUCCESS > lock`.
        match content.trim().parse::<CheckState>() {
            Ok(state) => Ok(Some(state)),
            Err(_) => {
                let location = self.store.location(check);
                warn!(check = %check, path = %location, "Lock holds an invalid state");
                Err(CheckError::MalformedLock { location, content })
            }
        }
    }

    fn failed(check: CheckType, op: &str, err: CheckError) -> Outcome {
        let outcome = Outcome::from_error(check, &err);
        if matches!(err, CheckError::Store(_) | CheckError::Spawn(_)) {
            error!(check = %check, op, exit_code = outcome.exit_code(), "{}", err);
        } else {
            debug!(check = %check, op, exit_code = outcome.exit_code(), "{}", err);
        }
        outcome
    }
}
