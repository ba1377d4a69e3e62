use std::env;

const DEFAULT_SEARCH_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SUMMARIZE_URL: &str = "http://127.0.0.1:8001";

#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub search_url: String,
    pub summarize_url: String,
}

impl ScoutConfig {
    pub fn from_env() -> Self {
        Self {
            search_url: env_or("PAPER_SEARCH_SERVER_URL", DEFAULT_SEARCH_URL),
            summarize_url: env_or("PDF_SUMMARIZE_SERVER_URL", DEFAULT_SUMMARIZE_URL),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
