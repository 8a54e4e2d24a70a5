use soa_monitor_domain::{DomainError, ServerAddr, ServerEndpoint};
use std::net::SocketAddr;
use std::time::Duration;

/// Turns a configured server into a socket address.
///
/// Literal addresses are returned as-is; hostnames go through the system
/// resolver on every call so DNS changes of the servers are picked up.
pub async fn resolve_server(
    server: &ServerAddr,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    let (hostname, port) = match server.endpoint() {
        ServerEndpoint::Resolved(addr) => return Ok(*addr),
        ServerEndpoint::Unresolved { hostname, port } => (hostname, *port),
    };

    let target = format!("{}:{}", hostname, port);

    let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: server.to_string(),
        })?
        .map_err(|e| DomainError::ServerResolution {
            server: server.to_string(),
            message: e.to_string(),
        })?;

    addrs.next().ok_or_else(|| DomainError::ServerResolution {
        server: server.to_string(),
        message: format!("no addresses found for {}", target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_literal_address_skips_lookup() {
        let server = ServerAddr::parse("192.0.2.1:5353").unwrap();
        let addr = resolve_server(&server, Duration::from_millis(10))
            .await
            .unwrap();
        assert_eq!(addr, "192.0.2.1:5353".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_localhost_resolves_with_configured_port() {
        let server = ServerAddr::parse("localhost:5300").unwrap();
        let addr = resolve_server(&server, Duration::from_secs(2)).await.unwrap();
        assert_eq!(addr.port(), 5300);
        assert!(addr.ip().is_loopback());
    }
}
