//! Best-effort client address resolution from proxy headers.

use std::net::SocketAddr;

use axum::http::HeaderMap;

/// Sentinel returned when neither the proxy headers nor the transport peer
/// yield a usable address.
pub const UNKNOWN_ADDR: &str = "UNKNOWN";

/// Proxy headers consulted for the originating address, highest precedence
/// first.
const FORWARD_HEADERS: [&str; 5] = [
    "client-ip",
    "x-forwarded-for",
    "x-forwarded",
    "forwarded-for",
    "forwarded",
];

/// Resolve the best-guess originating client address for one request.
///
/// The first non-empty candidate wins, in this order: `Client-IP`,
/// `X-Forwarded-For`, `X-Forwarded`, `Forwarded-For`, `Forwarded`, the
/// transport peer address, and finally [`UNKNOWN_ADDR`]. `X-Forwarded-For`
/// is returned verbatim; a multi-hop comma-separated chain is not split
/// and the first hop is not extracted.
///
/// All five headers are client-controlled and are consulted ahead of the
/// transport-verified peer address, so the result can be spoofed by anyone
/// who sets a header. It is suitable for logging and audit trails, never
/// for access-control decisions. The returned string is not guaranteed to
/// parse as an IP address.
///
/// A header counts as absent when the key is missing, the value is empty,
/// or the value is not valid visible ASCII. A peer of `None` or `Some("")`
/// counts the same way. The function is pure and never fails.
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<&str>) -> String {
    for name in FORWARD_HEADERS {
        if let Some(value) = usable_header(headers, name) {
            return value.to_string();
        }
    }

    match peer {
        Some(addr) if !addr.is_empty() => addr.to_string(),
        _ => UNKNOWN_ADDR.to_string(),
    }
}

/// [`resolve_client_ip`] for callers holding the connection's socket address
/// (e.g. axum's `ConnectInfo`). Only the IP is a candidate; the port is
/// dropped.
pub fn resolve_client_ip_from_socket(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let peer_ip = peer.map(|addr| addr.ip().to_string());
    resolve_client_ip(headers, peer_ip.as_deref())
}

fn usable_header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let value = headers.get(name)?.to_str().ok()?;
    (!value.is_empty()).then_some(value)
}
