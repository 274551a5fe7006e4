//! Command-line parsing.
//!
//! Accepts the Go-flag style used by existing probe definitions
//! (`check run -type liveness`) as well as the usual `--type liveness`.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::check::{Action, CheckState, CheckType};
use crate::error::CheckError;

pub const MISSING_SUBCOMMAND: &str = "Missing subcommand (run, lock or unlock)";

const SUBCOMMANDS: [&str; 3] = ["run", "lock", "unlock"];

/// Kubernetes-style liveness/readiness checks with lockable results.
#[derive(Parser, Debug)]
#[command(name = "check", version = crate::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report the locked state, or run the check's command (LIVENESS_CHECK / READINESS_CHECK)
    Run {
        /// liveness or readiness
        #[arg(long = "type", value_name = "TYPE")]
        check: CheckType,
    },
    /// Force the check's result until unlocked
    Lock {
        /// liveness or readiness
        #[arg(long = "type", value_name = "TYPE")]
        check: CheckType,
        /// success or failure
        #[arg(long, value_name = "STATE")]
        state: CheckState,
    },
    /// Remove the check's lock
    Unlock {
        /// liveness or readiness
        #[arg(long = "type", value_name = "TYPE")]
        check: CheckType,
    },
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::Run { check } => Action::Run(check),
            Command::Lock { check, state } => Action::Lock(check, state),
            Command::Unlock { check } => Action::Unlock(check),
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// An operation to perform.
    Action(Action),
    /// Help or version text; print it and exit successfully.
    Info(String),
}

/// Parse process arguments (program name first).
///
/// Usage errors come back as [`CheckError::Usage`] with the rendered message.
pub fn parse_args<I, T>(args: I) -> Result<Parsed, CheckError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let args = normalize_args(args);
    if args.len() < 2 {
        return Err(CheckError::Usage(MISSING_SUBCOMMAND.to_string()));
    }

    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Parsed::Action(cli.command.into())),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Parsed::Info(e.to_string()))
            }
            _ => Err(CheckError::Usage(e.to_string().trim_end().to_string())),
        },
    }
}

/// Rewrite Go-style arguments into what clap expects.
///
/// - the subcommand is matched case-insensitively
/// - `-type` / `-state=x` become `--type` / `--state=x`
fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| match i {
            0 => arg,
            1 => {
                let lower = arg.to_lowercase();
                if SUBCOMMANDS.contains(&lower.as_str()) {
                    lower
                } else {
                    arg
                }
            }
            _ => widen_flag(arg),
        })
        .collect()
}

fn widen_flag(arg: String) -> String {
    let Some(rest) = arg.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }

    let name = rest.split('=').next().unwrap_or_default();
    if name.len() > 1 && name.chars().all(|c| c.is_ascii_alphabetic()) {
        format!("-{}", arg)
    } else {
        arg
    }
}
