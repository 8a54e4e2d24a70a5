use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::DomainError;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Where a server lives once its configured string has been parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServerEndpoint {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl ServerEndpoint {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            ServerEndpoint::Resolved(addr) => Some(*addr),
            ServerEndpoint::Unresolved { .. } => None,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            ServerEndpoint::Resolved(addr) => addr.port(),
            ServerEndpoint::Unresolved { port, .. } => *port,
        }
    }

    /// Returns (hostname, port) if this endpoint still needs name resolution.
    pub fn unresolved_parts(&self) -> Option<(&str, u16)> {
        match self {
            ServerEndpoint::Unresolved { hostname, port } => Some((hostname, *port)),
            ServerEndpoint::Resolved(_) => None,
        }
    }
}

/// A DNS server as written in configuration.
///
/// Identity is the configured string: `ns1.example.com` and
/// `ns1.example.com:53` are two different servers for reporting purposes even
/// though they reach the same endpoint. Accepted forms are `host`,
/// `host:port`, `192.0.2.1`, `192.0.2.1:port`, `2001:db8::1` and
/// `[2001:db8::1]:port`; the port defaults to 53.
#[derive(Debug, Clone)]
pub struct ServerAddr {
    raw: Arc<str>,
    endpoint: ServerEndpoint,
}

impl ServerAddr {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidServerAddress(
                "server address cannot be empty".to_string(),
            ));
        }

        let endpoint = parse_endpoint(trimmed)
            .ok_or_else(|| DomainError::InvalidServerAddress(trimmed.to_string()))?;

        Ok(Self {
            raw: trimmed.into(),
            endpoint,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn endpoint(&self) -> &ServerEndpoint {
        &self.endpoint
    }

    pub fn port(&self) -> u16 {
        self.endpoint.port()
    }
}

fn parse_endpoint(s: &str) -> Option<ServerEndpoint> {
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Some(ServerEndpoint::Resolved(addr));
    }
    if let Ok(ip) = s.parse::<IpAddr>() {
        return Some(ServerEndpoint::Resolved(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
    }
    if let Some(rest) = s.strip_prefix('[') {
        // "[v6]" without a port; "[v6]:port" already parsed as a SocketAddr.
        let ip = rest.strip_suffix(']')?.parse::<IpAddr>().ok()?;
        return Some(ServerEndpoint::Resolved(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
    }

    let (host, port) = match s.rsplit_once(':') {
        Some((host, port_str)) => (host, port_str.parse::<u16>().ok()?),
        None => (s, DEFAULT_DNS_PORT),
    };

    if !is_valid_hostname(host) {
        return None;
    }

    Some(ServerEndpoint::Unresolved {
        hostname: host.into(),
        port,
    })
}

fn is_valid_hostname(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    !host.is_empty()
        && host.len() <= 253
        && host.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && label
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
}

impl PartialEq for ServerAddr {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ServerAddr {}

impl Hash for ServerAddr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ServerAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
