use std::env;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_ARXIV_BASE_URL: &str = "https://export.arxiv.org/api/query";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub bind_addr: String,
    pub arxiv_base_url: String,
    pub request_timeout: Duration,
}

impl SearchConfig {
    /// Read once at startup; handlers receive the resulting state by injection.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("SEARCH_BIND_ADDR", DEFAULT_BIND_ADDR),
            arxiv_base_url: env_or("ARXIV_BASE_URL", DEFAULT_ARXIV_BASE_URL),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
