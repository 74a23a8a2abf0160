//! Local static file server for browser-based JavaScript test runners.
//!
//! Serves the parent of the working directory over HTTP and forces the
//! Content-Type of `.js`, `.json`, `.html` and `.css` responses.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
