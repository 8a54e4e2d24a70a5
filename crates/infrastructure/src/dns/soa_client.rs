use super::message_builder::MessageBuilder;
use super::resolver::resolve_server;
use super::soa_parser::SoaParser;
use super::transport::tcp::TcpTransport;
use super::transport::udp::UdpTransport;
use super::transport::DnsTransport;
use async_trait::async_trait;
use hickory_proto::op::Message;
use soa_monitor_application::ports::SoaQuery;
use soa_monitor_domain::{DomainError, Serial, ServerAddr, Zone};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(2000);

/// SOA client speaking plain DNS: UDP first, one TCP retry when the UDP
/// answer comes back truncated.
///
/// The timeout bounds each network step (resolution, send, receive)
/// separately.
pub struct HickorySoaClient {
    timeout: Duration,
}

impl HickorySoaClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn exchange(
        &self,
        transport: &dyn DnsTransport,
        id: u16,
        query: &[u8],
        server: &ServerAddr,
    ) -> Result<Message, DomainError> {
        let response = transport.send(query, self.timeout).await?;
        let message = SoaParser::decode(&response.bytes, server)?;

        if message.id() != id {
            return Err(DomainError::InvalidDnsResponse {
                server: server.to_string(),
                message: format!(
                    "response id {} does not match query id {} ({})",
                    message.id(),
                    id,
                    response.protocol_used
                ),
            });
        }

        Ok(message)
    }
}

impl Default for HickorySoaClient {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT)
    }
}

#[async_trait]
impl SoaQuery for HickorySoaClient {
    async fn query_serial(&self, zone: &Zone, server: &ServerAddr) -> Result<Serial, DomainError> {
        let addr = resolve_server(server, self.timeout).await?;
        let (id, query) = MessageBuilder::build_soa_query(zone)?;

        let mut message = self
            .exchange(&UdpTransport::new(addr), id, &query, server)
            .await?;

        if message.truncated() {
            debug!(domain = %zone, server = %server, "UDP response truncated, retrying over TCP");
            message = self
                .exchange(&TcpTransport::new(addr), id, &query, server)
                .await?;
        }

        SoaParser::extract_serial(&message, server)
    }
}
