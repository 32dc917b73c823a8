use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::net::IpAddr;
use std::time::Instant;
use tracing::debug;
use warden_dns_application::ports::ClientBindingsPort;

struct Binding {
    device_id: String,
    bound_at: Instant,
}

/// IP→device bindings, written by the control plane when it observes an
/// authenticated device and read on every packet. Entries are timestamped so
/// the sweep job can drop bindings that outlived the session TTL.
#[derive(Default)]
pub struct ClientBindings {
    map: DashMap<IpAddr, Binding, FxBuildHasher>,
}

impl ClientBindings {
    pub fn new() -> Self {
        Self {
            map: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl ClientBindingsPort for ClientBindings {
    fn bind(&self, ip: IpAddr, device_id: &str) {
        debug!(client = %ip, device = %device_id, "Client bound");
        self.map.insert(
            ip,
            Binding {
                device_id: device_id.to_string(),
                bound_at: Instant::now(),
            },
        );
    }

    fn lookup(&self, ip: IpAddr) -> Option<String> {
        self.map.get(&ip).map(|b| b.device_id.clone())
    }

    fn unbind(&self, ip: IpAddr) -> bool {
        self.map.remove(&ip).is_some()
    }

    fn sweep_expired(&self, max_age_secs: u64) -> usize {
        let before = self.map.len();
        self.map
            .retain(|_, binding| binding.bound_at.elapsed().as_secs() < max_age_secs);
        before - self.map.len()
    }
}
