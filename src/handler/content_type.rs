//! Content-Type override middleware
//!
//! Forces a fixed Content-Type for the asset types a browser test runner
//! loads, whatever the wrapped handler would have guessed.

use crate::http::mime;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Request, Response, StatusCode};
use percent_encoding::percent_decode_str;
use std::future::Future;

pub const JAVASCRIPT: &str = "application/javascript; charset=utf-8";
pub const JSON: &str = "application/json; charset=utf-8";
pub const HTML: &str = "text/html; charset=utf-8";
pub const CSS: &str = "text/css; charset=utf-8";

/// Forced Content-Type for a request path, matched on its lowercased extension
pub fn content_type_override(path: &str) -> Option<&'static str> {
    let ext = mime::extension_of(path)?.to_ascii_lowercase();
    match ext.as_str() {
        "js" => Some(JAVASCRIPT),
        "json" => Some(JSON),
        "html" => Some(HTML),
        "css" => Some(CSS),
        _ => None,
    }
}

/// Run `next` and apply the Content-Type override for the request path.
///
/// Always delegates. The override lands on every response except 4xx/5xx
/// error pages, which carry their own `text/plain` type.
pub async fn with_content_type<B, F, Fut>(req: Request<B>, next: F) -> Response<Full<Bytes>>
where
    F: FnOnce(Request<B>) -> Fut,
    Fut: Future<Output = Response<Full<Bytes>>>,
{
    let forced = content_type_override(&percent_decode_str(req.uri().path()).decode_utf8_lossy());

    let mut resp = next(req).await;
    if let Some(content_type) = forced {
        if !is_error_page(resp.status()) {
            resp.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }
    resp
}

fn is_error_page(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}
