//! Static file serving module
//!
//! Maps request paths onto the served root: files, index files, directory
//! listings, and the error statuses for everything that cannot be served.

use crate::config::AppState;
use crate::http::{self, mime, response};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Characters escaped in listing hrefs
const HREF_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Request information needed for serving a file
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Raw (still percent-encoded) URL path
    pub path: String,
    pub query: Option<String>,
    pub is_head: bool,
}

impl RequestContext {
    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self {
            path: req.uri().path().to_string(),
            query: req.uri().query().map(ToString::to_string),
            is_head: req.method() == Method::HEAD,
        }
    }
}

/// Serve the request path from the state's root directory
pub async fn serve(ctx: &RequestContext, state: &AppState) -> Response<Full<Bytes>> {
    let is_head = ctx.is_head;
    let raw_path = ctx.path.as_str();

    let Some(relative) = decode_request_path(raw_path) else {
        return http::build_400_response();
    };

    let target = match resolve(&state.root, &relative).await {
        Ok(path) => path,
        Err(resp) => return resp,
    };

    let meta = match fs::metadata(&target).await {
        Ok(m) => m,
        Err(e) => return open_error_response(&e),
    };

    if !meta.is_dir() {
        return serve_file(&target, last_segment(&relative), is_head).await;
    }

    if !raw_path.ends_with('/') {
        return http::build_redirect_response(&directory_redirect(raw_path, ctx.query.as_deref()));
    }

    let index_name = state.config.site.index_file.as_str();
    let index = target.join(index_name);
    if fs::metadata(&index).await.is_ok_and(|m| m.is_file()) {
        return serve_file(&index, index_name, is_head).await;
    }

    serve_listing(&target, is_head).await
}

/// Percent-decode a request path and reject parent segments and NUL bytes
///
/// Returns the path relative to the root, without its leading slash.
pub fn decode_request_path(raw_path: &str) -> Option<String> {
    let decoded = percent_decode_str(raw_path).decode_utf8().ok()?;
    if decoded.contains('\0') || decoded.split(['/', '\\']).any(|seg| seg == "..") {
        return None;
    }
    Some(decoded.trim_start_matches('/').to_string())
}

/// Relative `Location` for a directory requested without its trailing slash
///
/// Only the last segment is used, so a path starting with `//` can never
/// turn into a redirect to another host.
fn directory_redirect(raw_path: &str, query: Option<&str>) -> String {
    let base = last_segment(raw_path);
    match query {
        Some(q) => format!("{base}/?{q}"),
        None => format!("{base}/"),
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Resolve a relative path to a canonical path inside `root`
async fn resolve(root: &Path, relative: &str) -> Result<PathBuf, Response<Full<Bytes>>> {
    let canonical = fs::canonicalize(root.join(relative))
        .await
        .map_err(|e| open_error_response(&e))?;
    if canonical.starts_with(root) {
        Ok(canonical)
    } else {
        Err(http::build_403_response())
    }
}

/// Status for a failure to locate or open a path
fn open_error_response(err: &io::Error) -> Response<Full<Bytes>> {
    match err.kind() {
        io::ErrorKind::PermissionDenied => http::build_403_response(),
        _ => http::build_404_response(),
    }
}

/// Read and serve a file; `name` is the requested file name the default
/// Content-Type is derived from, not the name of a symlink's target
async fn serve_file(path: &Path, name: &str, is_head: bool) -> Response<Full<Bytes>> {
    let data = match fs::read(path).await {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return http::build_403_response();
        }
        Err(_) => return http::build_500_response(),
    };

    let content_type = mime::detect_content_type(name, &data);
    response::build_content_response(Bytes::from(data), content_type, is_head)
}

async fn serve_listing(dir: &Path, is_head: bool) -> Response<Full<Bytes>> {
    let mut names = match list_directory(dir).await {
        Ok(n) => n,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return http::build_403_response();
        }
        Err(_) => return http::build_500_response(),
    };
    names.sort();

    let html = render_listing(&names);
    response::build_content_response(Bytes::from(html), "text/html; charset=utf-8", is_head)
}

/// Entry names of a directory, directories suffixed with `/`
async fn list_directory(dir: &Path) -> io::Result<Vec<String>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        names.push(name);
    }
    Ok(names)
}

fn render_listing(names: &[String]) -> String {
    let mut html = String::from(
        "<!doctype html>\n<meta name=\"viewport\" content=\"width=device-width\">\n<pre>\n",
    );
    for name in names {
        let href = utf8_percent_encode(name, HREF_ENCODE_SET);
        html.push_str(&format!("<a href=\"{href}\">{}</a>\n", escape_html(name)));
    }
    html.push_str("</pre>\n");
    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&#34;")
        .replace('\'', "&#39;")
}
