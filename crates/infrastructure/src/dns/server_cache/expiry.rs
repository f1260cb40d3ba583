use super::storage::Tiers;
use resolvd_domain::DnsServerAddress;
use std::sync::Weak;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// One record in the expiring tier.
///
/// The version stamp identifies the exact insertion a timer was scheduled
/// for: refreshing a server bumps the version, so a stale timer that already
/// started firing finds a mismatch and leaves the new entry alone.
pub(super) struct ExpiringEntry {
    pub(super) version: u64,
    pub(super) deadline: Option<Instant>,
    _timer: Option<ExpiryTimer>,
}

impl ExpiringEntry {
    /// Entry that never expires on its own.
    pub(super) fn pinned(version: u64) -> Self {
        Self {
            version,
            deadline: None,
            _timer: None,
        }
    }

    pub(super) fn expiring(version: u64, deadline: Instant, timer: ExpiryTimer) -> Self {
        Self {
            version,
            deadline: Some(deadline),
            _timer: Some(timer),
        }
    }
}

/// Owned handle to a scheduled eviction.
///
/// Aborts the task when dropped, so replacing or removing an entry cancels
/// its timer inside the same critical section that mutates the tier.
pub(super) struct ExpiryTimer {
    handle: JoinHandle<()>,
}

impl ExpiryTimer {
    /// Spawns a task that evicts `server` once `deadline` passes, provided
    /// the entry still carries `version`.
    ///
    /// The task holds only a weak reference to the shared state, so an
    /// outstanding deadline does not keep a dropped cache alive.
    pub(super) fn schedule(
        tiers: Weak<Mutex<Tiers>>,
        server: DnsServerAddress,
        version: u64,
        deadline: Instant,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let Some(tiers) = tiers.upgrade() else {
                return;
            };
            let mut tiers = tiers.lock().await;
            let current = tiers.expiring.get(&server).map(|entry| entry.version);
            if current == Some(version) {
                tiers.expiring.remove(&server);
                debug!(server = %server, "Expiring DNS server lifetime elapsed");
            }
        });

        Self { handle }
    }
}

impl Drop for ExpiryTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
