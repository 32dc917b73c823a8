use serde::Deserialize;
use std::net::Ipv4Addr;
use warden_dns_domain::BlockingMode;

/// Partial update of the runtime blocking plan; omitted fields keep their
/// current value.
#[derive(Debug, Deserialize)]
pub struct UpdateBlockingRequest {
    pub mode: Option<BlockingMode>,
    pub block_page_ip: Option<Ipv4Addr>,
}
