//! HTTP response building module
//!
//! Builders for the handful of responses the mock backend sends.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderValue, InvalidHeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, SERVER,
};
use hyper::{Method, Response, StatusCode};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build 200 response carrying a serialized JSON body
pub fn build_json_response(body: Vec<u8>, server_name: &str) -> Response<Full<Bytes>> {
    build_with_required_headers(
        StatusCode::OK,
        JSON_CONTENT_TYPE,
        Bytes::from(body),
        server_name,
    )
}

/// Build 501 response for methods the responder does not handle
pub fn build_501_response(method: &Method, server_name: &str) -> Response<Full<Bytes>> {
    let body = format!("501 Unsupported method ('{method}')");
    build_with_required_headers(
        StatusCode::NOT_IMPLEMENTED,
        "text/plain",
        Bytes::from(body),
        server_name,
    )
}

/// Content type and the CORS wildcard go on every response.
/// An unusable `Server` value only drops that one header.
fn build_with_required_headers(
    status: StatusCode,
    content_type: &'static str,
    body: Bytes,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(body));
    *resp.status_mut() = status;

    let headers = resp.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    match HeaderValue::from_str(server_name) {
        Ok(value) => {
            headers.insert(SERVER, value);
        }
        Err(e) => log_invalid_header("Server", &e),
    }

    resp
}

/// Log a header value that could not be encoded
fn log_invalid_header(name: &str, error: &InvalidHeaderValue) {
    crate::logger::log_error(&format!("Skipping invalid {name} header: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_json_response_headers() {
        let resp = build_json_response(b"{}".to_vec(), "Test/1.0");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(resp.headers()[SERVER], "Test/1.0");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"{}");
    }

    #[tokio::test]
    async fn test_501_response() {
        let resp = build_501_response(&Method::POST, "Test/1.0");
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"501 Unsupported method ('POST')");
    }

    #[tokio::test]
    async fn test_invalid_server_name_keeps_required_headers() {
        let resp = build_json_response(
            br#"{"best_match_donor_id": "101"}"#.to_vec(),
            "JeevanSetu\x01",
        );
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(resp.headers().get(SERVER).is_none());

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"best_match_donor_id": "101"}"#);
    }

    #[test]
    fn test_invalid_server_name_on_501() {
        let resp = build_501_response(&Method::DELETE, "bad\nname");
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/plain");
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(resp.headers().get(SERVER).is_none());
    }
}
