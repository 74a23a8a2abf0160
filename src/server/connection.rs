// Connection module
// Serves a single accepted TCP connection on its own task

use std::sync::Arc;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Serves HTTP/1.1 with keep-alive through the request handler
/// 3. Logs connection-level failures
///
/// Requests share no mutable state, so each connection only holds a clone
/// of the `Arc`.
pub fn handle_connection(stream: tokio::net::TcpStream, state: Arc<config::AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state))),
        );

        if let Err(err) = conn.await {
            if !is_client_disconnect(&err) {
                logger::log_connection_error(&err);
            }
        }
    });
}

/// Errors caused by the peer going away mid-connection
fn is_client_disconnect(err: &hyper::Error) -> bool {
    err.is_incomplete_message() || err.is_canceled() || err.is_closed()
}
