//! UDP transport for resolver queries (RFC 1035 §4.2.1).
//!
//! One datagram out, one datagram back, from a fresh ephemeral socket.
//! Truncated replies are returned as-is; there is no TCP retry.

use async_trait::async_trait;
use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{lookup_host, UdpSocket};
use tracing::{debug, warn};
use zonewire_application::ports::DnsTransport;
use zonewire_domain::DomainError;

/// Large enough for any reply the codec can decode.
const MAX_UDP_RESPONSE_SIZE: usize = 2048;

/// DNS over UDP transport
pub struct UdpTransport {
    port: u16,
    timeout: Option<Duration>,
}

impl UdpTransport {
    /// Servers named without a port are contacted on `port`.
    pub fn new(port: u16) -> Self {
        Self {
            port,
            timeout: None,
        }
    }

    /// `None` waits for the reply indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn resolve_server(&self, server: &str) -> Result<SocketAddr, DomainError> {
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }

        lookup_host((server, self.port))
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to resolve {}: {}", server, e)))?
            .next()
            .ok_or_else(|| DomainError::IoError(format!("No address found for {}", server)))
    }

    async fn bounded<T>(
        &self,
        server: SocketAddr,
        operation: impl Future<Output = io::Result<T>>,
    ) -> Result<io::Result<T>, DomainError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, operation)
                .await
                .map_err(|_| DomainError::QueryTimeout {
                    server: server.to_string(),
                }),
            None => Ok(operation.await),
        }
    }
}

fn ephemeral_bind_addr(server: SocketAddr) -> SocketAddr {
    if server.is_ipv4() {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(&self, message: &[u8], server: &str) -> Result<Vec<u8>, DomainError> {
        let server_addr = self.resolve_server(server).await?;

        let socket = UdpSocket::bind(ephemeral_bind_addr(server_addr))
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = self
            .bounded(server_addr, socket.send_to(message, server_addr))
            .await?
            .map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to send UDP query to {}: {}",
                    server_addr, e
                ))
            })?;

        debug!(server = %server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let (bytes_received, from_addr) = self
            .bounded(server_addr, socket.recv_from(&mut recv_buf))
            .await?
            .map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to receive UDP response from {}: {}",
                    server_addr, e
                ))
            })?;

        if from_addr.ip() != server_addr.ip() {
            warn!(
                expected = %server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(server = %server_addr, bytes_received, "UDP response received");

        Ok(recv_buf)
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
