pub mod server;
pub mod transport;

pub use server::{run_udp_server, DnsServerHandler};
pub use transport::UdpTransport;
