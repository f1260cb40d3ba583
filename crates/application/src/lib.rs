//! resolvd Application Layer
pub mod ports;

pub use ports::DnsServerCachePort;
