pub mod anthropic;
pub mod gemini;
pub mod openai;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::{LlmConfig, LlmProvider};
use crate::llm::anthropic::AnthropicBackend;
use crate::llm::gemini::GeminiBackend;
use crate::llm::openai::OpenAiBackend;

// One policy for every backend: provider choice must not change how the
// summary is generated, only which service generates it.
pub const SUMMARY_TEMPERATURE: f32 = 0.1;
pub const SUMMARY_MAX_TOKENS: u32 = 250;

pub fn summary_prompt(text: &str) -> String {
    format!(
        "Summarize the following research paper content in a concise manner (max 200 words), \
         highlighting its main objectives, methods, and key findings:\n\n{}",
        text
    )
}

#[async_trait]
pub trait SummarizationBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Takes the fully built prompt and returns the generated summary text.
    async fn summarize(&self, prompt: &str) -> Result<String>;
}

/// Selects the one backend this process will use, or `None` when the service
/// should run in degraded mode (unsupported selector or missing credential).
pub fn build_backend(config: &LlmConfig) -> Option<Box<dyn SummarizationBackend>> {
    let provider = config.provider?;
    let Some(api_key) = config.api_key.clone() else {
        log::warn!(
            "{} API key not set; summarization will be unavailable",
            provider.label()
        );
        return None;
    };

    let backend: Box<dyn SummarizationBackend> = match provider {
        LlmProvider::OpenAi => Box::new(OpenAiBackend::new(
            api_key,
            config.model.clone(),
            config.base_url.clone(),
        )),
        LlmProvider::Anthropic => Box::new(AnthropicBackend::new(
            api_key,
            config.model.clone(),
            config.base_url.clone(),
        )),
        LlmProvider::Gemini => Box::new(GeminiBackend::new(
            api_key,
            config.model.clone(),
            config.base_url.clone(),
        )),
    };
    log::info!("Using {} model: {}", backend.name(), config.model);
    Some(backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: Option<LlmProvider>, api_key: Option<&str>) -> LlmConfig {
        LlmConfig {
            provider,
            api_key: api_key.map(str::to_string),
            model: "test-model".to_string(),
            base_url: None,
        }
    }

    #[test]
    fn missing_credential_means_no_backend() {
        assert!(build_backend(&config(Some(LlmProvider::OpenAi), None)).is_none());
    }

    #[test]
    fn unsupported_selector_means_no_backend() {
        assert!(build_backend(&config(None, Some("key"))).is_none());
    }

    #[test]
    fn each_provider_selects_its_backend() {
        let openai = build_backend(&config(Some(LlmProvider::OpenAi), Some("key"))).unwrap();
        assert_eq!(openai.name(), "OpenAI");
        let anthropic = build_backend(&config(Some(LlmProvider::Anthropic), Some("key"))).unwrap();
        assert_eq!(anthropic.name(), "Anthropic");
        let gemini = build_backend(&config(Some(LlmProvider::Gemini), Some("key"))).unwrap();
        assert_eq!(gemini.name(), "Gemini");
    }

    #[test]
    fn prompt_states_the_summary_contract() {
        let prompt = summary_prompt("Extracted body text.");
        assert!(prompt.contains("max 200 words"));
        assert!(prompt.contains("objectives, methods, and key findings"));
        assert!(prompt.ends_with("Extracted body text."));
    }
}
