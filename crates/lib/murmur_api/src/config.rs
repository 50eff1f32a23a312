//! API server configuration.

use std::path::PathBuf;

/// Default listener address, matching the port the web UI expects.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// JSON file with replacement reply candidates.
    pub replies_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable         | Default            |
    /// |------------------|--------------------|
    /// | `BIND_ADDR`      | `127.0.0.1:5000`   |
    /// | `MURMUR_REPLIES` | built-in replies   |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            replies_path: lookup("MURMUR_REPLIES").map(PathBuf::from),
        }
    }

    /// Replace the host and/or port of `bind_addr`, keeping whichever part
    /// is not given.
    pub fn override_listen(&mut self, host: Option<&str>, port: Option<u16>) {
        if host.is_none() && port.is_none() {
            return;
        }
        let (current_host, current_port) = self
            .bind_addr
            .rsplit_once(':')
            .unwrap_or((self.bind_addr.as_str(), "5000"));

        let host = host.unwrap_or(current_host);
        let port = port.map_or_else(|| current_port.to_string(), |p| p.to_string());
        self.bind_addr = format!("{host}:{port}");
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            replies_path: None,
        }
    }
}
