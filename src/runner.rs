//! Delegated health command execution.
//!
//! The dispatcher hands the configured command string to a [`CommandRunner`]
//! and forwards whatever exit status comes back. [`ShellRunner`] is the real
//! implementation; tests substitute their own runners.

use std::fmt;
use std::io;
use std::process::{Command, ExitStatus};

use tracing::debug;

/// Exit code reported when the child has no exit code of its own.
pub const EXIT_INTERNAL: i32 = 255;

/// How a delegated command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandExit {
    /// Normal termination with an exit code.
    Code(i32),
    /// Terminated by a signal (Unix only).
    Signal(i32),
    /// No exit code and no signal available.
    Unknown,
}

impl CommandExit {
    /// Exit code this process forwards for the child's termination.
    ///
    /// Only a normal exit carries a code through; a child killed by a
    /// signal, or one with no status at all, yields [`EXIT_INTERNAL`].
    pub fn exit_code(&self) -> i32 {
        match *self {
            CommandExit::Code(code) => code,
            CommandExit::Signal(_) | CommandExit::Unknown => EXIT_INTERNAL,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

impl From<ExitStatus> for CommandExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return CommandExit::Code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return CommandExit::Signal(signal);
            }
        }

        CommandExit::Unknown
    }
}

/// The command could not be started at all.
#[derive(Debug)]
pub struct SpawnError {
    pub program: String,
    pub error: io::Error,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to start '{}': {}", self.program, self.error)
    }
}

impl std::error::Error for SpawnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Runs a health command to completion.
pub trait CommandRunner {
    /// Execute `command`, blocking until it exits.
    fn run(&self, command: &str) -> Result<CommandExit, SpawnError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &str) -> Result<CommandExit, SpawnError> {
        (**self).run(command)
    }
}

/// Runs commands through `<shell> -c <command>` with inherited stdio.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandExit, SpawnError> {
        let to_spawn_error = |error: io::Error| SpawnError {
            program: self.shell.clone(),
            error,
        };

        let mut child = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .spawn()
            .map_err(to_spawn_error)?;

        debug!(shell = %self.shell, pid = child.id(), "Health command started");

        // No timeout: the probe caller owns the deadline.
        let status = child.wait().map_err(to_spawn_error)?;
        Ok(CommandExit::from(status))
    }
}
