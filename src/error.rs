//! Startup error types
//!
//! Everything that can stop the server before it starts accepting requests.
//! Per-request failures never reach this type; they become status codes.

use std::io;
use std::net::AddrParseError;

/// Fatal startup error
#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("cannot determine working directory: {0}")]
    CurrentDir(#[source] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },
    #[error("listen tcp {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] io::Error),
}

pub type Result<T, E = StartupError> = std::result::Result<T, E>;
