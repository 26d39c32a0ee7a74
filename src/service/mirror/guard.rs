//! Per-channel provisioning locks.
//!
//! Concurrent message events for the same unprovisioned channel must not race
//! into duplicate provisioning. Each channel gets its own async mutex; callers
//! acquire the channel's lock, re-check the stored mapping, and only provision
//! if it is still empty, so a second first-message waits for the in-flight
//! attempt and reuses its result.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

/// Process-lifetime registry of per-channel provisioning locks.
///
/// Lock entries are created on first sight of a channel and kept for the
/// lifetime of the process, bounded by the number of distinct channels seen.
pub struct ProvisionLocks {
    locks: Mutex<HashMap<u64, Arc<Mutex<()>>>>,
}

impl ProvisionLocks {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the lock guarding provisioning for a channel, creating it on
    /// first sight. The caller locks the returned mutex for the duration of
    /// the mapping re-check and provisioning call.
    pub async fn acquire(&self, channel_id: u64) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;

        locks
            .entry(channel_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl Default for ProvisionLocks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_channel_shares_one_lock() {
        let locks = ProvisionLocks::new();

        let first = locks.acquire(42).await;
        let second = locks.acquire(42).await;

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn different_channels_do_not_contend() {
        let locks = ProvisionLocks::new();

        let first = locks.acquire(1).await;
        let second = locks.acquire(2).await;

        assert!(!Arc::ptr_eq(&first, &second));

        // Holding one channel's lock leaves the other acquirable
        let _held = first.lock().await;
        assert!(second.try_lock().is_ok());
    }

    #[tokio::test]
    async fn holding_the_lock_blocks_a_second_acquisition() {
        let locks = ProvisionLocks::new();

        let lock = locks.acquire(7).await;
        let held = lock.lock().await;

        let contender = locks.acquire(7).await;
        assert!(contender.try_lock().is_err());

        drop(held);
        assert!(contender.try_lock().is_ok());
    }
}
