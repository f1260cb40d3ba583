use super::storage::ServerCache;
use async_trait::async_trait;
use resolvd_application::DnsServerCachePort;
use resolvd_domain::{DnsServerAddress, ServerLifetime};

#[async_trait]
impl DnsServerCachePort for ServerCache {
    async fn update_expiring_servers(
        &self,
        servers: &[DnsServerAddress],
        lifetime: ServerLifetime,
    ) {
        ServerCache::update_expiring_servers(self, servers, lifetime).await;
    }

    async fn set_runtime_servers(&self, lists: &[Vec<DnsServerAddress>]) {
        ServerCache::set_runtime_servers(self, lists).await;
    }

    async fn set_default_servers(&self, servers: &[DnsServerAddress]) {
        ServerCache::set_default_servers(self, servers).await;
    }

    async fn remove_interface_servers(&self, interface_id: u64) {
        ServerCache::remove_interface_servers(self, interface_id).await;
    }

    async fn servers_cache(&self) -> Vec<DnsServerAddress> {
        ServerCache::servers_cache(self).await
    }
}
