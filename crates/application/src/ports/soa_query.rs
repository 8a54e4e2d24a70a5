use async_trait::async_trait;
use soa_monitor_domain::{DomainError, Serial, ServerAddr, Zone};

/// Fetches the SOA serial of `zone` from a single server.
///
/// Implementations bound the exchange with their own timeout and report
/// transport and response-shape problems as typed [`DomainError`]s.
#[async_trait]
pub trait SoaQuery: Send + Sync {
    async fn query_serial(&self, zone: &Zone, server: &ServerAddr) -> Result<Serial, DomainError>;
}
