use std::env;
use std::time::Duration;

pub const DEFAULT_GATEWAY_BASE_URL: &str = "http://localhost:5678";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Load `.env` if present; real environment variables always win.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Runtime configuration, read from the environment with local defaults.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base address of the upstream workflow gateway.
    pub gateway_base_url: String,
    /// Listen address for the /api proxy surface.
    pub bind_addr: String,
    /// Per-request timeout on outbound gateway calls. A hanging upstream
    /// fails the call instead of stalling the session bootstrap forever.
    pub gateway_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let gateway_base_url =
            env::var("GATEWAY_BASE_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_BASE_URL.to_string());
        let bind_addr = env::var("PRANA_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let timeout_secs = env::var("GATEWAY_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            gateway_base_url,
            bind_addr,
            gateway_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway_base_url: DEFAULT_GATEWAY_BASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            gateway_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
