use crate::{DnsServerAddress, DomainError};
use serde::{Deserialize, Serialize};

/// Static resolver configuration.
///
/// Carries the globally configured fallback servers that seed the default
/// tier of the server cache at boot. Servers discovered at runtime never
/// appear here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub default_servers: Vec<String>,
}

impl ResolverConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, DomainError> {
        toml::from_str(s).map_err(|e| DomainError::ConfigError(e.to_string()))
    }

    /// Parses and normalizes the configured default-server list.
    pub fn parsed_default_servers(&self) -> Result<Vec<DnsServerAddress>, DomainError> {
        self.default_servers.iter().map(|s| s.parse()).collect()
    }
}
