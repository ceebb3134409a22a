use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.dexscreener.com";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// DexScreener client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the DexScreener API, without trailing slash
    pub api_url: String,

    /// Timeout applied to every request
    pub timeout: Duration,

    /// User agent sent with each request, the API rejects some default agents
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let timeout_secs = env::var("DEXSCREENER_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_url: env::var("DEXSCREENER_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            user_agent: env::var("DEXSCREENER_USER_AGENT")
                .unwrap_or_else(|_| "Mozilla/5.0".to_string()),
        }
    }
}
