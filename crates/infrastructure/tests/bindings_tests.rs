use std::net::IpAddr;
use warden_dns_application::ports::ClientBindingsPort;
use warden_dns_infrastructure::ClientBindings;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn test_bind_and_lookup() {
    let bindings = ClientBindings::new();
    assert_eq!(bindings.lookup(ip("192.168.1.10")), None);

    bindings.bind(ip("192.168.1.10"), "aa:bb:cc:dd:ee:ff");
    assert_eq!(
        bindings.lookup(ip("192.168.1.10")).as_deref(),
        Some("aa:bb:cc:dd:ee:ff")
    );

    // Re-binding overwrites.
    bindings.bind(ip("192.168.1.10"), "11:22:33:44:55:66");
    assert_eq!(
        bindings.lookup(ip("192.168.1.10")).as_deref(),
        Some("11:22:33:44:55:66")
    );
}

#[test]
fn test_unbind() {
    let bindings = ClientBindings::new();
    bindings.bind(ip("10.0.0.1"), "dev");
    assert!(bindings.unbind(ip("10.0.0.1")));
    assert!(!bindings.unbind(ip("10.0.0.1")));
    assert_eq!(bindings.lookup(ip("10.0.0.1")), None);
}

#[test]
fn test_sweep_drops_only_expired_entries() {
    let bindings = ClientBindings::new();
    bindings.bind(ip("10.0.0.1"), "a");
    bindings.bind(ip("10.0.0.2"), "b");

    // Nothing is older than a day.
    assert_eq!(bindings.sweep_expired(86_400), 0);
    assert_eq!(bindings.len(), 2);

    // A zero TTL expires everything.
    assert_eq!(bindings.sweep_expired(0), 2);
    assert!(bindings.is_empty());
}
