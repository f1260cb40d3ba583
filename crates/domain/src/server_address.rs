use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

/// Port assumed when a server is configured without one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// A DNS server endpoint: host address, port and interface scope.
///
/// A port of `0` means "unspecified" and normalizes to [`DEFAULT_DNS_PORT`];
/// an `interface_id` of `0` means the address is not scoped to any interface.
/// Equality and hashing are meaningful only on normalized values, so every
/// ingress into the cache normalizes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnsServerAddress {
    pub addr: IpAddr,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub interface_id: u64,
}

impl DnsServerAddress {
    /// Unscoped server with an unspecified port.
    pub fn new(addr: IpAddr) -> Self {
        Self {
            addr,
            port: 0,
            interface_id: 0,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn on_interface(mut self, interface_id: u64) -> Self {
        self.interface_id = interface_id;
        self
    }

    /// Fills in the default DNS port if none was supplied.
    pub fn normalized(mut self) -> Self {
        if self.port == 0 {
            self.port = DEFAULT_DNS_PORT;
        }
        self
    }

    pub fn is_scoped(&self) -> bool {
        self.interface_id != 0
    }
}

impl From<SocketAddr> for DnsServerAddress {
    fn from(sock: SocketAddr) -> Self {
        Self {
            addr: sock.ip(),
            port: sock.port(),
            interface_id: 0,
        }
    }
}

impl fmt::Display for DnsServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.addr {
            IpAddr::V4(v4) => write!(f, "{}:{}", v4, self.port)?,
            IpAddr::V6(v6) => write!(f, "[{}]:{}", v6, self.port)?,
        }
        if self.interface_id != 0 {
            write!(f, "%{}", self.interface_id)?;
        }
        Ok(())
    }
}

impl FromStr for DnsServerAddress {
    type Err = DomainError;

    /// Parses `ip`, `ip:port`, `[v6]:port`, each with an optional `%nic`
    /// suffix. A missing port normalizes to [`DEFAULT_DNS_PORT`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_part, interface_id) = match s.rsplit_once('%') {
            Some((addr_part, nic)) => {
                let id = nic
                    .parse::<u64>()
                    .map_err(|_| DomainError::InvalidInterfaceId(nic.to_string()))?;
                (addr_part, id)
            }
            None => (s, 0),
        };

        if let Ok(sock) = addr_part.parse::<SocketAddr>() {
            return Ok(Self {
                addr: sock.ip(),
                port: sock.port(),
                interface_id,
            }
            .normalized());
        }

        let addr = addr_part
            .parse::<IpAddr>()
            .map_err(|_| DomainError::InvalidServerAddress(s.to_string()))?;
        Ok(Self {
            addr,
            port: DEFAULT_DNS_PORT,
            interface_id,
        })
    }
}

/// How long dynamically learned servers stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerLifetime {
    /// Valid until `now + duration`. `Duration::ZERO` revokes the listed
    /// servers immediately.
    Finite(Duration),
    /// Valid until explicitly removed or refreshed.
    Infinite,
}

impl ServerLifetime {
    /// Converts the wire encoding used by discovery protocols: negative
    /// means infinite, zero means revoke now.
    pub fn from_secs(secs: i64) -> Self {
        if secs < 0 {
            Self::Infinite
        } else {
            Self::Finite(Duration::from_secs(secs as u64))
        }
    }

    pub fn is_revocation(&self) -> bool {
        matches!(self, Self::Finite(d) if d.is_zero())
    }
}
