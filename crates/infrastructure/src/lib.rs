//! resolvd Infrastructure Layer
pub mod dns;

pub use dns::server_cache::ServerCache;
