//! In-memory lock store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{LockStore, StoreError};
use crate::check::{CheckState, CheckType};

/// Lock store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryLockStore {
    locks: Mutex<HashMap<CheckType, String>>,
}

impl MemoryLockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store arbitrary content, bypassing state serialization.
    pub fn insert_raw(&self, check: CheckType, content: impl Into<String>) {
        self.locks().insert(check, content.into());
    }

    /// Whether a lock exists for the check.
    pub fn contains(&self, check: CheckType) -> bool {
        self.locks().contains_key(&check)
    }

    fn locks(&self) -> MutexGuard<'_, HashMap<CheckType, String>> {
        self.locks.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LockStore for MemoryLockStore {
    fn read(&self, check: CheckType) -> Result<Option<String>, StoreError> {
        Ok(self.locks().get(&check).cloned())
    }

    fn write(&self, check: CheckType, state: CheckState) -> Result<(), StoreError> {
        self.locks().insert(check, state.as_str().to_string());
        Ok(())
    }

    fn remove(&self, check: CheckType) -> Result<bool, StoreError> {
        Ok(self.locks().remove(&check).is_some())
    }

    fn location(&self, check: CheckType) -> String {
        format!("memory:{}", check)
    }
}
