//! Persisted lock storage.
//!
//! A lock forces the result of `run` for one check type. Locks live outside
//! the process and are shared by every invocation of the tool; there is no
//! mutual exclusion between concurrent writers (last writer wins).
//!
//! The dispatcher only sees the [`LockStore`] trait:
//!
//! | Store | Backing | Use |
//! |-------|---------|-----|
//! | [`FileLockStore`] | `<dir>/<type>.lock` files | production |
//! | [`MemoryLockStore`] | in-process map | unit tests |

mod file;
mod memory;

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::check::{CheckState, CheckType};

pub use file::FileLockStore;
pub use memory::MemoryLockStore;

/// Key-value storage of lock contents, keyed by check type.
pub trait LockStore {
    /// Raw lock content, or `None` when no lock exists.
    ///
    /// Content is returned unparsed so that malformed locks can be reported.
    fn read(&self, check: CheckType) -> Result<Option<String>, StoreError>;

    /// Create or overwrite the lock with the canonical state string.
    fn write(&self, check: CheckType, state: CheckState) -> Result<(), StoreError>;

    /// Delete the lock. Returns `false` when there was nothing to delete.
    fn remove(&self, check: CheckType) -> Result<bool, StoreError>;

    /// Human-readable location of the lock, used in messages.
    fn location(&self, check: CheckType) -> String;
}

impl<S: LockStore + ?Sized> LockStore for &S {
    fn read(&self, check: CheckType) -> Result<Option<String>, StoreError> {
        (**self).read(check)
    }

    fn write(&self, check: CheckType, state: CheckState) -> Result<(), StoreError> {
        (**self).write(check, state)
    }

    fn remove(&self, check: CheckType) -> Result<bool, StoreError> {
        (**self).remove(check)
    }

    fn location(&self, check: CheckType) -> String {
        (**self).location(check)
    }
}

/// Lock operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Read,
    Write,
    Remove,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOp::Read => write!(f, "read"),
            StoreOp::Write => write!(f, "write"),
            StoreOp::Remove => write!(f, "remove"),
        }
    }
}

/// I/O failure while accessing a lock.
#[derive(Debug)]
pub struct StoreError {
    pub op: StoreOp,
    pub path: PathBuf,
    pub error: io::Error,
}

impl StoreError {
    pub fn new(op: StoreOp, path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self {
            op,
            path: path.into(),
            error,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to {} lock '{}': {}",
            self.op,
            self.path.display(),
            self.error
        )
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
