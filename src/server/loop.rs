// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config;
use crate::logger;

/// Accept loop.
///
/// Each accepted connection is served on its own task. Returns when
/// `shutdown` resolves; connections still in flight are not waited for.
pub async fn serve<S>(listener: TcpListener, state: Arc<config::AppState>, shutdown: S)
where
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(stream, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_warning(&format!("Accept error: {e}; retrying"));
                    }
                }
            }

            () = &mut shutdown => {
                return;
            }
        }
    }
}
