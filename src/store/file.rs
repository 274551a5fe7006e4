//! Filesystem-backed lock store.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use super::{LockStore, StoreError, StoreOp};
use crate::check::{CheckState, CheckType};

/// Lock files at `<dir>/liveness.lock` and `<dir>/readiness.lock`.
#[derive(Debug, Clone)]
pub struct FileLockStore {
    dir: PathBuf,
}

impl FileLockStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the lock file for a check.
    pub fn path(&self, check: CheckType) -> PathBuf {
        self.dir.join(format!("{}.lock", check.as_str()))
    }
}

impl LockStore for FileLockStore {
    fn read(&self, check: CheckType) -> Result<Option<String>, StoreError> {
        let path = self.path(check);
        match fs::read(&path) {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "Lock file found");
                Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::new(StoreOp::Read, path, e)),
        }
    }

    fn write(&self, check: CheckType, state: CheckState) -> Result<(), StoreError> {
        let path = self.path(check);

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        options
            .open(&path)
            .and_then(|mut file| file.write_all(state.as_str().as_bytes()))
            .map_err(|e| StoreError::new(StoreOp::Write, &path, e))
    }

    fn remove(&self, check: CheckType) -> Result<bool, StoreError> {
        let path = self.path(check);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::new(StoreOp::Remove, path, e)),
        }
    }

    fn location(&self, check: CheckType) -> String {
        self.path(check).display().to_string()
    }
}
