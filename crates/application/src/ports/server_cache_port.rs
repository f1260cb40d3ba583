use async_trait::async_trait;
use resolvd_domain::{DnsServerAddress, ServerLifetime};

/// Port for the three-tier DNS server-address cache.
///
/// The resolver front-end reads `servers_cache` before dispatching queries;
/// discovery and interface-management logic push updates through the
/// remaining methods. Implementations must be safe to share across tasks.
#[async_trait]
pub trait DnsServerCachePort: Send + Sync {
    /// Inserts or refreshes dynamically discovered servers. Servers absent
    /// from `servers` keep whatever lifetime they already had.
    async fn update_expiring_servers(
        &self,
        servers: &[DnsServerAddress],
        lifetime: ServerLifetime,
    );

    /// Replaces the per-interface server lists wholesale; an empty slice
    /// clears the tier.
    async fn set_runtime_servers(&self, lists: &[Vec<DnsServerAddress>]);

    /// Replaces the global fallback servers wholesale; an empty slice clears
    /// the tier.
    async fn set_default_servers(&self, servers: &[DnsServerAddress]);

    /// Drops every expiring server scoped to `interface_id`. A zero id is
    /// unscoped and the call is a no-op.
    async fn remove_interface_servers(&self, interface_id: u64);

    /// Merged, deduplicated snapshot: expiring servers first, then runtime
    /// lists in order, then defaults.
    async fn servers_cache(&self) -> Vec<DnsServerAddress>;
}
