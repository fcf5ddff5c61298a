//! Raw HTTP client for the Gemini API.
//!
//! No agent awareness — just makes API calls via reqwest.

use reqwest::Client;

use super::types::{GenerateRequest, GenerateResponse};

/// Errors from LLM operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("model returned no text content")]
    EmptyResponse,

    #[error("missing API key: {0}")]
    MissingApiKey(String),
}

/// Raw HTTP client for the Gemini `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client with the default base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, "https://generativelanguage.googleapis.com".into())
    }

    /// Create a client with a custom base URL (for testing with mock servers).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Send a generateContent request for the given model.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, LlmError> {
        // The Gemini API takes the key as a query parameter, not a header.
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();

        if status >= 400 {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(LlmError::ApiError {
                status,
                message: body,
            });
        }

        let resp: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {e}")))?;

        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = GeminiClient::new("test-key".into());
        assert_eq!(client.base_url, "https://generativelanguage.googleapis.com");
    }

    #[test]
    fn client_custom_base_url() {
        let client =
            GeminiClient::with_base_url("test-key".into(), "http://localhost:8080".into());
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn error_display() {
        let err = LlmError::ApiError {
            status: 401,
            message: "invalid api key".into(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("invalid api key"));

        let err = LlmError::EmptyResponse;
        assert!(err.to_string().contains("no text content"));

        let err = LlmError::MissingApiKey("GEMINI_API_KEY not set".into());
        assert!(err.to_string().contains("missing API key"));
    }
}
