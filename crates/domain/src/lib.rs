//! resolvd Domain Layer
pub mod config;
pub mod errors;
pub mod server_address;

pub use config::ResolverConfig;
pub use errors::DomainError;
pub use server_address::{DnsServerAddress, ServerLifetime, DEFAULT_DNS_PORT};
