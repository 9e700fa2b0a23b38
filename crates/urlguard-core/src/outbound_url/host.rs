//! Lexical host denylist: loopback names, RFC 1918, link-local, multicast.
//!
//! Checks compare the hostname as written; no DNS resolution happens here.

use std::net::Ipv4Addr;

use super::error::OutboundUrlError;

/// Exact hostnames that always denote the local machine. IPv6 entries are
/// matched after bracket stripping; the fully expanded loopback is listed so
/// a hand-typed long form is caught even without IPv6 parsing.
const LOOPBACK_HOSTS: &[&str] = &[
    "localhost",
    "127.0.0.1",
    "0.0.0.0",
    "::1",
    "0000:0000:0000:0000:0000:0000:0000:0001",
];

/// Refuses hosts that lexically denote a loopback, private, link-local, or
/// multicast destination.
pub fn check_host(host: &str) -> Result<(), OutboundUrlError> {
    let lower = host.to_ascii_lowercase();
    let bare = lower
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(&lower);

    if LOOPBACK_HOSTS.contains(&bare) {
        return Err(OutboundUrlError::blocked(host));
    }

    if let Ok(ip) = bare.parse::<Ipv4Addr>() {
        if in_blocked_ipv4_range(ip) {
            return Err(OutboundUrlError::blocked(host));
        }
    }

    Ok(())
}

/// Literal IPv4 ranges outbound gateway traffic must never target.
///
/// Boundary-exact by octet: 172.15.x.x and 172.32.x.x fall outside
/// 172.16.0.0/12 and pass; 240.0.0.1 falls outside 224.0.0.0/4 and passes.
fn in_blocked_ipv4_range(ip: Ipv4Addr) -> bool {
    let [a, b, _, _] = ip.octets();
    match a {
        10 => true,                    // 10.0.0.0/8
        172 => (16..=31).contains(&b), // 172.16.0.0/12
        192 => b == 168,               // 192.168.0.0/16
        169 => b == 254,               // 169.254.0.0/16 link-local
        224..=239 => true,             // 224.0.0.0/4 multicast
        _ => false,
    }
}
