use std::process::ExitCode;
use std::sync::Arc;

use liveflux_test_server::config::{self, AppState, Config};
use liveflux_test_server::error::{Result, StartupError};
use liveflux_test_server::{logger, server};

fn main() -> ExitCode {
    if let Err(e) = logger::init() {
        eprintln!("[WARN] Logger initialization failed: {e}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cfg = Config::from_args(std::env::args())?;
    let root = config::current_served_root()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(StartupError::Runtime)?;

    let state = Arc::new(AppState::new(cfg, root));
    let result = runtime.block_on(server::run(state));

    // Abrupt stop: in-flight connections and blocking file reads are abandoned
    runtime.shutdown_background();
    result
}
