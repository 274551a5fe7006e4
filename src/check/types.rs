//! Check type and state enumerations.

use std::fmt;
use std::str::FromStr;

/// Kubernetes-compatible probe kinds handled by this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckType {
    /// Liveness probe: restart the process if failing.
    Liveness,
    /// Readiness probe: stop routing traffic if failing.
    Readiness,
}

impl CheckType {
    /// Lowercase name, also used as the lock file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liveness => "liveness",
            Self::Readiness => "readiness",
        }
    }

    /// Capitalized name for console messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Liveness => "Liveness",
            Self::Readiness => "Readiness",
        }
    }

    /// Environment variable holding the shell command for this check.
    pub fn command_env(&self) -> &'static str {
        match self {
            Self::Liveness => "LIVENESS_CHECK",
            Self::Readiness => "READINESS_CHECK",
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "liveness" => Ok(Self::Liveness),
            "readiness" => Ok(Self::Readiness),
            _ => Err(ParseError::Type(s.to_string())),
        }
    }
}

/// Forced outcome persisted in a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Success,
    Failure,
}

impl CheckState {
    /// Canonical serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }

    /// Exit code a locked check finishes with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            _ => Err(ParseError::State(s.to_string())),
        }
    }
}

/// Unrecognized check type or state token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Type(String),
    State(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Type(s) => write!(f, "Not a type: {} expecting: (liveness, readiness)", s),
            ParseError::State(s) => write!(f, "Not a state: {} expecting: (failure, success)", s),
        }
    }
}

impl std::error::Error for ParseError {}
