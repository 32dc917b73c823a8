use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};
use warden_dns_domain::DomainError;

/// Maximum UDP DNS response size we accept from upstream
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// Forwards a client's query, byte-for-byte, to the upstream recursive
/// resolver over UDP. Every exchange uses a fresh ephemeral socket and is
/// bounded by the configured timeout.
pub struct UdpForwarder {
    upstream: SocketAddr,
    timeout: Duration,
}

impl UdpForwarder {
    pub fn new(upstream: SocketAddr, timeout: Duration) -> Self {
        Self { upstream, timeout }
    }

    pub fn upstream(&self) -> SocketAddr {
        self.upstream
    }

    pub async fn forward(&self, query_bytes: &[u8]) -> Result<Message, DomainError> {
        tokio::time::timeout(self.timeout, self.exchange(query_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
    }

    async fn exchange(&self, query_bytes: &[u8]) -> Result<Message, DomainError> {
        let bind_addr: SocketAddr = if self.upstream.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr).await?;
        socket.send_to(query_bytes, self.upstream).await?;

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let (n, from_addr) = socket.recv_from(&mut recv_buf).await?;

        if from_addr.ip() != self.upstream.ip() {
            warn!(
                expected = %self.upstream,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        debug!(server = %self.upstream, bytes = n, "Upstream response received");

        Message::from_vec(&recv_buf[..n])
            .map_err(|e| DomainError::UpstreamProtocol(e.to_string()))
    }
}
