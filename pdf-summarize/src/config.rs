use std::env;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8001";
const DOWNLOAD_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi,
    Anthropic,
    Gemini,
}

impl LlmProvider {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "anthropic" => Some(Self::Anthropic),
            "google" | "gemini" => Some(Self::Gemini),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Gemini => "Gemini",
        }
    }

    fn key_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::Gemini => "GOOGLE_API_KEY",
        }
    }

    fn model_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_MODEL_NAME",
            Self::Anthropic => "ANTHROPIC_MODEL_NAME",
            Self::Gemini => "GOOGLE_MODEL_NAME",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-3.5-turbo",
            Self::Anthropic => "claude-3-sonnet-20240229",
            Self::Gemini => "gemini-pro",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: Option<LlmProvider>,
    pub api_key: Option<String>,
    pub model: String,
    /// Override for the provider's API origin; tests point this at a local server.
    pub base_url: Option<String>,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        let raw = env_or("LLM_PROVIDER", "openai");
        let provider = LlmProvider::parse(&raw);
        match provider {
            Some(p) => Self {
                provider: Some(p),
                api_key: env::var(p.key_var()).ok().filter(|key| !key.is_empty()),
                model: env_or(p.model_var(), p.default_model()),
                base_url: None,
            },
            None => {
                log::warn!(
                    "Unsupported LLM_PROVIDER \"{}\"; summarization will be unavailable",
                    raw
                );
                Self {
                    provider: None,
                    api_key: None,
                    model: String::new(),
                    base_url: None,
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    pub bind_addr: String,
    pub download_timeout: Duration,
    pub llm: LlmConfig,
}

impl SummarizeConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("SUMMARIZE_BIND_ADDR", DEFAULT_BIND_ADDR),
            download_timeout: Duration::from_secs(DOWNLOAD_TIMEOUT_SECS),
            llm: LlmConfig::from_env(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_names_parse_case_insensitively() {
        assert_eq!(LlmProvider::parse("OpenAI"), Some(LlmProvider::OpenAi));
        assert_eq!(LlmProvider::parse("anthropic"), Some(LlmProvider::Anthropic));
        assert_eq!(LlmProvider::parse("google"), Some(LlmProvider::Gemini));
        assert_eq!(LlmProvider::parse("gemini"), Some(LlmProvider::Gemini));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert_eq!(LlmProvider::parse("mistral"), None);
        assert_eq!(LlmProvider::parse(""), None);
    }
}
