//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method check, route selection,
//! serialization and access logging.

use crate::config::AppState;
use crate::handler::routes;
use crate::http::{self, json};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::header::{HeaderName, REFERER, USER_AGENT};
use hyper::http::uri::PathAndQuery;
use hyper::{Method, Request, Response, Uri, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = respond(req.method(), req.uri(), &state);

    if state.access_log() {
        log_access(&req, &response, peer_addr, started, &state);
    }

    Ok(response)
}

/// Build the response for one request
///
/// Every GET gets a 200; unknown paths get `{}` rather than a not-found status.
/// Routes match on the path alone; the log line carries the full target.
pub fn respond(method: &Method, uri: &Uri, state: &AppState) -> Response<Full<Bytes>> {
    let path = uri.path();
    logger::log_request_path(uri.path_and_query().map_or(path, PathAndQuery::as_str));
    let server_name = &state.config.http.server_name;

    if method != Method::GET {
        logger::log_warning(&format!("Unsupported method: {method}"));
        return http::build_501_response(method, server_name);
    }

    let payload = routes::select_payload(path, &state.data);
    match json::to_body(&payload) {
        Ok(body) => http::build_json_response(body, server_name),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize payload for {path}: {e}"));
            http::build_json_response(b"{}".to_vec(), server_name)
        }
    }
}

fn log_access<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
    state: &AppState,
) {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    logger::log_access(&entry, &state.config.logging.access_log_format);
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
