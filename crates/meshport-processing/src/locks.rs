//! Per-name serialization of conversions.
//!
//! Two conversions that derive the same export name take turns; conversions to different
//! names run in parallel. Entries are pruned once nothing holds or waits on them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Keyed async lock table
#[derive(Clone, Default)]
pub struct ConversionLocks {
    table: Arc<Mutex<HashMap<String, Weak<AsyncMutex<()>>>>>,
}

impl ConversionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `key`. Access is released when the guard drops.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            table.retain(|_, entry| entry.strong_count() > 0);

            match table.get(key).and_then(Weak::upgrade) {
                Some(lock) => lock,
                None => {
                    let lock = Arc::new(AsyncMutex::new(()));
                    table.insert(key.to_string(), Arc::downgrade(&lock));
                    lock
                }
            }
        };

        lock.lock_owned().await
    }

    /// Number of names currently held or awaited
    pub fn active(&self) -> usize {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.values().filter(|entry| entry.strong_count() > 0).count()
    }
}
