// 服务器模块入口
// 提供监听、连接处理和退出信号

pub mod connection;
pub mod listener;
pub mod signal;

// Rust 不允许 loop 作为模块名（关键字），改用 server_loop
#[path = "loop.rs"]
pub mod server_loop;

use std::sync::Arc;

use crate::config::AppState;
use crate::error::{Result, StartupError};
use crate::logger;

// 重新导出常用类型
pub use listener::{bind_listener, create_listener};
pub use server_loop::serve;

/// Bind the configured address, print the banner and serve until interrupted
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let addr = state.config.get_socket_addr()?;
    let listener = bind_listener(addr).map_err(|source| StartupError::Bind {
        addr: addr.to_string(),
        source,
    })?;

    logger::log_server_start(&state);

    serve(listener, state, signal::shutdown_signal()).await;
    Ok(())
}
