//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, then the
//! Content-Type middleware wrapped around the static file handler.

use crate::config::AppState;
use crate::handler::static_files::{self, RequestContext};
use crate::handler::content_type;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// Generic over the body type; request bodies are never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if let Some(resp) = check_http_method(req.method()) {
        return Ok(resp);
    }

    let state = &*state;
    let response = content_type::with_content_type(req, |req| {
        let ctx = RequestContext::from_request(&req);
        async move { static_files::serve(&ctx, state).await }
    })
    .await;
    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => Some(http::build_405_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::header::CONTENT_TYPE;
    use hyper::StatusCode;
    use tempfile::TempDir;

    fn site() -> (TempDir, Arc<AppState>) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir_all(root.join("tests")).unwrap();
        std::fs::create_dir_all(root.join("lib")).unwrap();
        std::fs::write(root.join("tests/runner.html"), "<!doctype html><title>runner</title>").unwrap();
        std::fs::write(root.join("lib/core.js"), "console.log('core');").unwrap();
        std::fs::write(root.join("lib/FIXTURE.JSON"), "{\"a\":1}").unwrap();
        std::fs::write(root.join("lib/site.css"), "body{}").unwrap();
        std::fs::write(root.join("lib/notes.txt"), "<html>not really</html>").unwrap();

        let state = AppState::new(Config::load(None).unwrap(), root.to_path_buf());
        (temp, Arc::new(state))
    }

    async fn fetch(state: &Arc<AppState>, method: Method, path: &str) -> Response<Full<Bytes>> {
        let req = Request::builder().method(method).uri(path).body(()).unwrap();
        handle_request(req, Arc::clone(state)).await.unwrap()
    }

    #[tokio::test]
    async fn test_runner_page() {
        let (_temp, state) = site();
        let resp = fetch(&state, Method::GET, "/tests/runner.html").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<!doctype html><title>runner</title>");
    }

    #[tokio::test]
    async fn test_forced_types() {
        let (_temp, state) = site();
        let resp = fetch(&state, Method::GET, "/lib/core.js").await;
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/javascript; charset=utf-8");

        let resp = fetch(&state, Method::GET, "/lib/FIXTURE.JSON").await;
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json; charset=utf-8");

        let resp = fetch(&state, Method::GET, "/lib/site.css").await;
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/css; charset=utf-8");
    }

    #[tokio::test]
    async fn test_unmapped_extension_uses_file_default() {
        let (_temp, state) = site();
        let resp = fetch(&state, Method::GET, "/lib/notes.txt").await;
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn test_not_found() {
        let (_temp, state) = site();
        let resp = fetch(&state, Method::GET, "/does/not/exist").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = fetch(&state, Method::GET, "/missing.js").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn test_directory_redirect_keeps_forced_type() {
        let (temp, state) = site();
        std::fs::create_dir_all(temp.path().join("bundle.js")).unwrap();

        let resp = fetch(&state, Method::GET, "/bundle.js").await;
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers()[hyper::header::LOCATION], "bundle.js/");
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/javascript; charset=utf-8");
    }

    #[tokio::test]
    async fn test_head_keeps_forced_type() {
        let (_temp, state) = site();
        let resp = fetch(&state, Method::HEAD, "/lib/core.js").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/javascript; charset=utf-8");
    }

    #[tokio::test]
    async fn test_method_checks() {
        let (_temp, state) = site();
        let resp = fetch(&state, Method::POST, "/lib/core.js").await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let resp = fetch(&state, Method::OPTIONS, "/lib/core.js").await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
