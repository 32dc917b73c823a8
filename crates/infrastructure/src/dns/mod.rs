pub mod forwarder;
pub mod handler;
pub mod server;

pub use forwarder::UdpForwarder;
pub use handler::{QueryHandler, QueryOutcome};
pub use server::run_udp_server;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Best-effort guess at the LAN-reachable local address: connect a UDP
/// socket towards the upstream and read back the local half. Used for the
/// redirect-mode block page target when none is configured.
pub fn detect_local_ipv4(upstream: SocketAddr) -> Option<Ipv4Addr> {
    let socket = std::net::UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(upstream).ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) if !ip.is_unspecified() => Some(ip),
        _ => None,
    }
}
