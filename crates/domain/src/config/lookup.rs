use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DNS_PORT: u16 = 53;

/// How TXT records are fetched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Explicit nameserver (`ip:port`). When unset the host's resolver
    /// configuration is used.
    #[serde(default)]
    pub server: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            server: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

impl LookupConfig {
    /// Parse `server`, accepting a bare IP address as port 53.
    pub fn server_addr(&self) -> Result<Option<SocketAddr>, ConfigError> {
        let Some(server) = self.server.as_deref() else {
            return Ok(None);
        };

        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(Some(addr));
        }

        server
            .parse::<IpAddr>()
            .map(|ip| Some(SocketAddr::new(ip, DNS_PORT)))
            .map_err(|_| ConfigError::Validation(format!("Invalid nameserver address: {}", server)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
