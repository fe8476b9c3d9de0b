#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use zonewire_application::ports::ZoneRepository;
use zonewire_application::use_cases::AnswerQueryUseCase;
use zonewire_infrastructure::dns::{run_udp_server, DnsServerHandler};
use zonewire_infrastructure::repositories::ZoneFileRepository;

pub const ZOO_ORIGIN: &str = "cs430.luther.edu";

pub fn zoo_zone_path() -> String {
    format!(
        "{}/../domain/tests/fixtures/zoo.zone",
        env!("CARGO_MANIFEST_DIR")
    )
}

/// A serve loop on an ephemeral loopback port, aborted on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    task: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let repository = ZoneFileRepository::new(zoo_zone_path());
        assert!(repository.load_zone().is_ok());

        let use_case = AnswerQueryUseCase::from_repository(&repository).unwrap();
        let handler = Arc::new(DnsServerHandler::new(Arc::new(use_case)));

        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let task = tokio::spawn(run_udp_server(socket, handler, 512));

        Self { addr, task }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
