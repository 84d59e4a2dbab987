//! Request metadata echoed back to the caller

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts, HeaderMap, Method, Uri},
};
use serde::Serialize;

const FORWARDED_FOR: &str = "x-forwarded-for";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

impl RequestInfo {
    /// Describe a request from its line, headers and transport peer address
    pub fn describe(method: &Method, uri: &Uri, headers: &HeaderMap, peer: Option<&str>) -> Self {
        Self {
            client_ip: client_ip(headers, peer.unwrap_or_default()),
            user_agent: header_str(headers, header::USER_AGENT.as_str())
                .unwrap_or_default()
                .to_string(),
            method: method.as_str().to_string(),
            path: uri.path().to_string(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Missing when the router is served without connect info
        let peer = ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|ConnectInfo(addr)| addr.to_string());

        Ok(Self::describe(
            &parts.method,
            &parts.uri,
            &parts.headers,
            peer.as_deref(),
        ))
    }
}

/// Resolve the client address
///
/// The first entry of a non-blank `X-Forwarded-For` wins and is trusted as-is; otherwise the
/// host part of the peer address, or the raw peer string if it has no port.
pub fn client_ip(headers: &HeaderMap, peer: &str) -> String {
    let forwarded = header_str(headers, FORWARDED_FOR).filter(|v| !v.trim().is_empty());
    if let Some(forwarded) = forwarded {
        let first = forwarded.split(',').next().unwrap_or_default();
        return first.trim().to_string();
    }

    match split_host_port(peer) {
        Some((host, _)) => host.to_string(),
        None => peer.to_string(),
    }
}

/// Split `host:port` or `[v6]:port`
fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        let port = tail.strip_prefix(':')?;
        return Some((host, port));
    }

    let (host, port) = addr.rsplit_once(':')?;
    if host.contains(':') {
        // Unbracketed IPv6 literal
        return None;
    }
    Some((host, port))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|h| h.to_str().ok())
}
