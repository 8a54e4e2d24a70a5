//! TCP transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Each message is framed with a two-byte big-endian length prefix. One
//! connection per query; the monitor only falls back to TCP on truncation.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use soa_monitor_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    async fn connect(&self, timeout: Duration) -> Result<TcpStream, DomainError> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| DomainError::TransportError {
                server: self.server_addr.to_string(),
                message: format!("TCP connect failed: {}", e),
            })?;

        stream.set_nodelay(true).map_err(|e| DomainError::TransportError {
            server: self.server_addr.to_string(),
            message: format!("failed to set TCP_NODELAY: {}", e),
        })?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect(timeout).await?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|message| DomainError::TransportError {
                server: self.server_addr.to_string(),
                message,
            })?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|message| DomainError::TransportError {
                server: self.server_addr.to_string(),
                message,
            })?;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), String>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len())
        .map_err(|_| format!("message too large: {} bytes", message_bytes.len()))?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| format!("failed to write length prefix: {}", e))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| format!("failed to write DNS message: {}", e))?;
    stream
        .flush()
        .await
        .map_err(|e| format!("failed to flush stream: {}", e))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, String>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| format!("failed to read response length: {}", e))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;
    if response_len == 0 {
        return Err("empty response".to_string());
    }

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| format!("failed to read response body: {}", e))?;

    Ok(response)
}
