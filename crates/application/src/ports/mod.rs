mod server_cache_port;

pub use server_cache_port::DnsServerCachePort;
