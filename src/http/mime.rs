//! MIME type detection module
//!
//! Default Content-Type for served files: extension table first, content
//! sniffing second.

/// Fallback for content that is neither known by extension nor plain text
pub const OCTET_STREAM: &str = "application/octet-stream";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Bytes inspected when sniffing
const SNIFF_LEN: usize = 512;

/// Get MIME Content-Type based on a lowercased file extension (without the dot)
///
/// # Examples
/// ```
/// use liveflux_test_server::http::mime::get_content_type;
/// assert_eq!(get_content_type("svg"), Some("image/svg+xml"));
/// assert_eq!(get_content_type("xyz"), None);
/// ```
pub fn get_content_type(extension: &str) -> Option<&'static str> {
    let content_type = match extension {
        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "txt" | "md" => TEXT_PLAIN,
        "xml" => "text/xml; charset=utf-8",
        "csv" => "text/csv; charset=utf-8",

        // JavaScript/WASM
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "map" => "application/json",
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "avif" => "image/avif",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",

        _ => return None,
    };
    Some(content_type)
}

/// Guess a Content-Type from the first bytes of a file
///
/// UTF-8 text without NUL bytes is `text/plain`, everything else binary.
/// A multi-byte character cut at the sniff boundary still counts as text.
pub fn sniff_content_type(data: &[u8]) -> &'static str {
    let head = &data[..data.len().min(SNIFF_LEN)];
    if head.contains(&0) {
        return OCTET_STREAM;
    }
    match std::str::from_utf8(head) {
        Ok(_) => TEXT_PLAIN,
        Err(e) if e.error_len().is_none() => TEXT_PLAIN,
        Err(_) => OCTET_STREAM,
    }
}

/// Default Content-Type for a file name and its content
pub fn detect_content_type(file_name: &str, data: &[u8]) -> &'static str {
    extension_of(file_name)
        .and_then(|ext| get_content_type(&ext.to_ascii_lowercase()))
        .unwrap_or_else(|| sniff_content_type(data))
}

/// Extension of the last path segment, without the dot
///
/// Dots in directory names do not count, and a segment with nothing after
/// its final dot has no extension.
pub fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = name.rsplit_once('.')?;
    (!ext.is_empty()).then_some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(get_content_type("html"), Some("text/html; charset=utf-8"));
        assert_eq!(get_content_type("png"), Some("image/png"));
        assert_eq!(get_content_type("woff2"), Some("font/woff2"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type("xyz"), None);
        assert_eq!(get_content_type(""), None);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("/lib/core.js"), Some("js"));
        assert_eq!(extension_of("/lib/core.min.JS"), Some("JS"));
        assert_eq!(extension_of("/a.js/file"), None);
        assert_eq!(extension_of("/README"), None);
        assert_eq!(extension_of("/trailing."), None);
        assert_eq!(extension_of("/dir/"), None);
        assert_eq!(extension_of("/.hidden"), Some("hidden"));
    }

    #[test]
    fn test_sniff() {
        assert_eq!(sniff_content_type(b"plain words"), TEXT_PLAIN);
        assert_eq!(sniff_content_type(b""), TEXT_PLAIN);
        assert_eq!(sniff_content_type(b"\x89PNG\r\n\x1a\n\0\0"), OCTET_STREAM);
        assert_eq!(sniff_content_type(&[0xff, 0xfe, 0x41]), OCTET_STREAM);
    }

    #[test]
    fn test_detect_prefers_extension() {
        assert_eq!(detect_content_type("logo.SVG", b"<svg/>"), "image/svg+xml");
        assert_eq!(detect_content_type("notes", b"hello"), TEXT_PLAIN);
        assert_eq!(detect_content_type("blob.bin", &[0, 1, 2]), OCTET_STREAM);
    }
}
