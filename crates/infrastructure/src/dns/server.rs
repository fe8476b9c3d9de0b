use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};
use zonewire_application::use_cases::AnswerQueryUseCase;

/// Maps one inbound datagram to the bytes to send back, if any.
pub struct DnsServerHandler {
    use_case: Arc<AnswerQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<AnswerQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Requests that fail validation get no reply at all.
    pub fn handle_datagram(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        match self.use_case.execute(datagram) {
            Ok(response) => Some(response),
            Err(e) if e.is_request_rejection() => {
                warn!(client = %client, error = %e, "Ignoring the request");
                None
            }
            Err(e) => {
                error!(client = %client, error = %e, "Failed to answer request");
                None
            }
        }
    }
}

/// Serves datagrams one at a time until the task is dropped. Receive errors
/// and bad requests are logged and the loop carries on.
pub async fn run_udp_server(
    socket: UdpSocket,
    handler: Arc<DnsServerHandler>,
    max_datagram_size: usize,
) {
    if let Ok(local) = socket.local_addr() {
        info!(bind_address = %local, max_datagram_size, "UDP server loop started");
    }

    let mut recv_buf = vec![0u8; max_datagram_size];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        debug!(client = %from, bytes = n, "Datagram received");

        let Some(response) = handler.handle_datagram(&recv_buf[..n], from) else {
            continue;
        };

        if let Err(e) = socket.send_to(&response, from).await {
            warn!(client = %from, error = %e, "Failed to send response");
        }
    }
}
