//! LLM access — Gemini API wrapper behind the `ModelClient` seam.
//!
//! The orchestrator only sees `ModelClient`; tests substitute scripted
//! implementations without any network.

pub mod client;
pub mod types;

use async_trait::async_trait;

pub use client::{GeminiClient, LlmError};
use types::{resolve_model, Content, GenerateRequest, GenerationConfig, Part};

/// One prompt in, one text completion out.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Production `ModelClient` backed by the Gemini API.
///
/// Temperature is pinned to 0.0 — the tool-call grammar is brittle enough
/// without sampling variance.
#[derive(Debug)]
pub struct Gemini {
    client: GeminiClient,
    model: String,
}

impl Gemini {
    /// Create a client with an explicit API key and model (aliases resolved).
    pub fn new(api_key: String, model: &str) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: resolve_model(model).to_string(),
        }
    }

    /// Create a client with a custom base URL (for testing).
    pub fn with_base_url(api_key: String, model: &str, base_url: String) -> Self {
        Self {
            client: GeminiClient::with_base_url(api_key, base_url),
            model: resolve_model(model).to_string(),
        }
    }

    /// The model in use (resolved to a full ID).
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ModelClient for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".into(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig { temperature: 0.0 }),
        };

        let response = self.client.generate_content(&self.model, &request).await?;

        if let Some(usage) = &response.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "gemini call complete"
            );
        }

        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_resolves_alias() {
        let gemini = Gemini::new("test-key".into(), "flash");
        assert_eq!(gemini.model(), "gemini-1.5-flash");
    }

    #[test]
    fn gemini_passes_through_full_id() {
        let gemini = Gemini::new("test-key".into(), "gemini-1.5-pro");
        assert_eq!(gemini.model(), "gemini-1.5-pro");
    }

    #[test]
    fn gemini_with_custom_base_url() {
        let gemini = Gemini::with_base_url("k".into(), "pro", "http://localhost:9999".into());
        assert_eq!(gemini.model(), "gemini-1.5-pro");
    }
}
