// Configuration module entry point
// Layers built-in defaults under the command line and computes the served root

mod state;
mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Result, StartupError};

// Re-export public types
pub use state::AppState;
pub use types::{Config, ServerConfig, SiteConfig};

pub const DEFAULT_PORT: &str = "8000";

impl Config {
    /// Build the configuration from process arguments.
    ///
    /// The first argument after the program name, when present, is the port.
    /// Anything after it is ignored.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        Self::load(args.into_iter().nth(1))
    }

    /// Load configuration with an optional port override
    pub fn load(port: Option<String>) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("server.host", "[::]")?
            .set_default("server.port", DEFAULT_PORT)?
            .set_default("site.runner_path", "/tests/runner.html")?
            .set_default("site.index_file", "index.html")?
            .set_override_option("server.port", port)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| StartupError::InvalidAddress { addr, source })
    }

    /// Base URL a local browser should open
    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.server.port)
    }

    pub fn runner_url(&self) -> String {
        format!("{}{}", self.base_url(), self.site.runner_path)
    }
}

/// Directory served to clients: the parent of the working directory
pub fn served_root(cwd: &Path) -> PathBuf {
    cwd.parent()
        .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf)
}

/// Served root for the current process
pub fn current_served_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(StartupError::CurrentDir)?;
    Ok(served_root(&cwd))
}
