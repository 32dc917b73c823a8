use crate::state::AppState;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use std::net::{IpAddr, SocketAddr};

/// Identity attached to each control-plane request by the external auth
/// proxy: `X-Session-ID` has already been resolved into `X-User-MAC` and
/// `X-Is-Guest` before the request reaches this process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub device_id: Option<String>,
    pub is_guest: bool,
}

/// Reads the auth headers, rejects guest mutations, refreshes the IP→device
/// binding for the DNS path, and stores the session for handlers.
pub async fn session_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let headers = request.headers();
    let device_id = headers
        .get("X-User-MAC")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    let is_guest = headers
        .get("X-Is-Guest")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true");

    if is_guest && !is_read_only_method(request.method()) {
        return Err(StatusCode::FORBIDDEN);
    }

    if let Some(device) = device_id.as_deref() {
        if let Some(ip) = client_ip(headers, request.extensions().get::<ConnectInfo<SocketAddr>>())
        {
            state.bindings.bind(ip, device);
        }
    }

    request.extensions_mut().insert(Session {
        device_id,
        is_guest,
    });
    Ok(next.run(request).await)
}

pub fn is_read_only_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Proxy headers win over the socket address, since control requests
/// normally arrive through the front-end reverse proxy.
fn client_ip(headers: &HeaderMap, peer: Option<&ConnectInfo<SocketAddr>>) -> Option<IpAddr> {
    if let Some(forwarded) = headers.get("X-Forwarded-For").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            if let Ok(ip) = first.trim().parse() {
                return Some(ip);
            }
        }
    }
    if let Some(real_ip) = headers.get("X-Real-IP").and_then(|v| v.to_str().ok()) {
        if let Ok(ip) = real_ip.trim().parse() {
            return Some(ip);
        }
    }
    peer.map(|info| info.0.ip())
}
