use super::handler::QueryHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{error, info};
use warden_dns_application::ports::TelemetrySink;
use warden_dns_domain::DomainError;

/// Datagrams above the standard DNS size are not expected from clients.
const RECV_BUF_SIZE: usize = 4096;

/// One listener; each datagram is dispatched to its own task so a slow
/// upstream exchange never head-of-line-blocks other clients.
pub async fn run_udp_server(
    bind_addr: SocketAddr,
    handler: Arc<QueryHandler>,
    telemetry: Arc<dyn TelemetrySink>,
) -> Result<(), DomainError> {
    let socket = Arc::new(create_udp_socket(bind_addr)?);
    info!(bind_address = %bind_addr, "DNS server listening");

    let mut recv_buf = [0u8; RECV_BUF_SIZE];
    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(x) => x,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let packet = recv_buf[..n].to_vec();
        let handler = handler.clone();
        let telemetry = telemetry.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            let outcome = handler.handle(&packet, from.ip()).await;
            if let Some(reply) = outcome.reply {
                if let Err(e) = socket.send_to(&reply, from).await {
                    error!(client = %from, error = %e, "Failed to send reply");
                }
            }
            // Telemetry strictly after the reply has been written.
            for record in outcome.records {
                telemetry.record(record);
            }
        });
    }
}

fn create_udp_socket(bind_addr: SocketAddr) -> Result<UdpSocket, DomainError> {
    let domain = if bind_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if bind_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(8 * 1024 * 1024)?;
    socket.set_send_buffer_size(4 * 1024 * 1024)?;
    socket.bind(&bind_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
