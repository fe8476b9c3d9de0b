use anyhow::Context;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{lookup_host, UdpSocket};
use tracing::info;
use zonewire_domain::config::ServerConfig;
use zonewire_infrastructure::dns::{run_udp_server, DnsServerHandler};

pub async fn start_dns_server(
    config: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket_addr = resolve_listen_address(config).await?;
    let socket = create_udp_socket(socket_addr)?;

    info!(bind_address = %socket_addr, "Starting DNS server");
    println!("Listening on {}:{}", config.bind_address, config.port);

    run_udp_server(socket, Arc::new(handler), config.max_datagram_size).await;
    Ok(())
}

async fn resolve_listen_address(config: &ServerConfig) -> anyhow::Result<SocketAddr> {
    let listen_address = config.listen_address();
    let resolved = lookup_host(listen_address.as_str())
        .await
        .with_context(|| format!("Invalid bind address {}", listen_address))?
        .next()
        .with_context(|| format!("No address found for {}", listen_address));
    resolved
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket
        .bind(&socket_addr.into())
        .with_context(|| format!("Failed to bind {}", socket_addr))?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
