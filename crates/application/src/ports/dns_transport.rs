use async_trait::async_trait;
use zonewire_domain::DomainError;

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one encoded message to `server` and returns the single reply.
    /// No retries.
    async fn exchange(&self, message: &[u8], server: &str) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
