use std::net::IpAddr;

/// IP→device bindings populated by the control plane and consumed on every
/// packet. No durability; entries carry a bind timestamp so a sweep can drop
/// stale ones.
pub trait ClientBindingsPort: Send + Sync {
    fn bind(&self, ip: IpAddr, device_id: &str);

    fn lookup(&self, ip: IpAddr) -> Option<String>;

    fn unbind(&self, ip: IpAddr) -> bool;

    /// Drop bindings older than `max_age_secs`; returns how many were removed.
    fn sweep_expired(&self, max_age_secs: u64) -> usize;
}
