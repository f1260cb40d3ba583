use super::expiry::{ExpiringEntry, ExpiryTimer};
use super::merge::merge_tiers;
use resolvd_domain::{DnsServerAddress, ServerLifetime};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

/// Three-tier DNS server-address registry.
///
/// Servers arrive through three independent channels: discovered servers
/// with individual lifetimes (expiring tier), per-interface lists replaced
/// wholesale (runtime tier) and globally configured fallbacks (default
/// tier). Reads merge whatever is currently resident; expiry is proactive,
/// driven by per-entry timers, so the read path never inspects deadlines.
///
/// Owned by the resolver that constructs it and shared by reference with
/// every collaborator; all state sits behind one lock.
pub struct ServerCache {
    tiers: Arc<Mutex<Tiers>>,
}

#[derive(Default)]
pub(super) struct Tiers {
    pub(super) expiring: HashMap<DnsServerAddress, ExpiringEntry>,
    pub(super) runtime: Vec<Vec<DnsServerAddress>>,
    pub(super) default_servers: Vec<DnsServerAddress>,
    next_version: u64,
}

impl Tiers {
    fn bump_version(&mut self) -> u64 {
        self.next_version = self.next_version.wrapping_add(1);
        self.next_version
    }
}

impl ServerCache {
    pub fn new() -> Self {
        info!("Initializing DNS server cache");
        Self {
            tiers: Arc::new(Mutex::new(Tiers::default())),
        }
    }

    /// Inserts or refreshes discovered servers.
    ///
    /// `ServerLifetime::Finite(ZERO)` revokes the listed servers instead,
    /// and `Infinite` pins them with no timer. Servers absent from the input
    /// keep their existing deadline and timer untouched; refreshed servers
    /// have their previous timer cancelled in the same critical section that
    /// installs the replacement, so a stale timer can never evict a fresh
    /// entry. Repeats within one call collapse to a single entry.
    pub async fn update_expiring_servers(
        &self,
        servers: &[DnsServerAddress],
        lifetime: ServerLifetime,
    ) {
        let mut tiers = self.tiers.lock().await;
        match lifetime {
            ServerLifetime::Finite(d) if d.is_zero() => {
                let mut removed = 0usize;
                for server in servers {
                    if tiers.expiring.remove(&server.normalized()).is_some() {
                        removed += 1;
                    }
                }
                debug!(listed = servers.len(), removed, "Revoked expiring DNS servers");
            }
            ServerLifetime::Infinite => {
                for server in servers {
                    let version = tiers.bump_version();
                    tiers
                        .expiring
                        .insert(server.normalized(), ExpiringEntry::pinned(version));
                }
                debug!(count = servers.len(), "Pinned expiring DNS servers");
            }
            ServerLifetime::Finite(d) => {
                let deadline = Instant::now() + d;
                for server in servers {
                    let server = server.normalized();
                    let version = tiers.bump_version();
                    let timer = ExpiryTimer::schedule(
                        Arc::downgrade(&self.tiers),
                        server,
                        version,
                        deadline,
                    );
                    tiers
                        .expiring
                        .insert(server, ExpiringEntry::expiring(version, deadline, timer));
                }
                debug!(
                    count = servers.len(),
                    lifetime_ms = d.as_millis() as u64,
                    "Updated expiring DNS servers"
                );
            }
        }
    }

    /// Replaces the runtime tier wholesale; an empty slice clears it.
    pub async fn set_runtime_servers(&self, lists: &[Vec<DnsServerAddress>]) {
        let runtime: Vec<Vec<DnsServerAddress>> = lists
            .iter()
            .map(|list| list.iter().map(|s| s.normalized()).collect())
            .collect();

        let mut tiers = self.tiers.lock().await;
        debug!(lists = runtime.len(), "Replacing runtime DNS servers");
        tiers.runtime = runtime;
    }

    /// Replaces the default tier wholesale; an empty slice clears it.
    pub async fn set_default_servers(&self, servers: &[DnsServerAddress]) {
        let default_servers: Vec<DnsServerAddress> =
            servers.iter().map(|s| s.normalized()).collect();

        let mut tiers = self.tiers.lock().await;
        debug!(count = default_servers.len(), "Replacing default DNS servers");
        tiers.default_servers = default_servers;
    }

    /// Drops every expiring server scoped to `interface_id`, cancelling
    /// timers. Zero is the unscoped id and the call is a no-op; runtime and
    /// default tiers are never touched.
    pub async fn remove_interface_servers(&self, interface_id: u64) {
        if interface_id == 0 {
            return;
        }

        let mut tiers = self.tiers.lock().await;
        let before = tiers.expiring.len();
        tiers
            .expiring
            .retain(|server, _| server.interface_id != interface_id);
        let removed = before - tiers.expiring.len();
        if removed > 0 {
            debug!(interface_id, removed, "Removed interface-scoped DNS servers");
        }
    }

    /// Fresh merged snapshot: expiring servers, then runtime lists in order,
    /// then defaults, globally deduplicated. The returned list is detached
    /// from internal state.
    pub async fn servers_cache(&self) -> Vec<DnsServerAddress> {
        let tiers = self.tiers.lock().await;
        merge_tiers(
            tiers.expiring.keys(),
            &tiers.runtime,
            &tiers.default_servers,
        )
    }
}

impl Default for ServerCache {
    fn default() -> Self {
        Self::new()
    }
}
