// Application state module
// Immutable per-process state shared by every connection task

use std::path::PathBuf;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Canonical served root; every resolved file must stay below it
    pub root: PathBuf,
}

impl AppState {
    pub fn new(config: Config, root: PathBuf) -> Self {
        let root = root.canonicalize().unwrap_or(root);
        Self { config, root }
    }
}
