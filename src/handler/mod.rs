//! Request handler module
//!
//! Responsible for request dispatch: the Content-Type middleware and the
//! static file handler it wraps.

pub mod content_type;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
