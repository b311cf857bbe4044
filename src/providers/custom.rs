use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::openai::{OpenAiRequest, OpenAiResponse};
use crate::providers::{GenerationRequest, Provider};

/// Client for a self-hosted, OpenAI-compatible endpoint.
///
/// Unlike the hosted providers, the endpoint URL is mandatory and the API key
/// is optional (local servers typically accept any credential).
#[derive(Debug)]
pub struct CustomEndpoint {
    /// HTTP client for API requests
    client: Client,
    /// API key, possibly empty
    api_key: String,
    /// Base URL of the server
    base_url: String,
}

impl CustomEndpoint {
    /// Create a new custom endpoint client.
    ///
    /// Fails with `ProviderError::MissingEndpoint` when the endpoint is absent
    /// or not a valid URL; this is a configuration error, not an auth error.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ProviderError::MissingEndpoint(
                "Custom provider requires an endpoint URL".to_string(),
            ));
        }

        let parsed = Url::parse(endpoint.trim()).map_err(|e| {
            ProviderError::MissingEndpoint(format!("Invalid endpoint URL '{}': {}", endpoint, e))
        })?;

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Complete a chat request against the configured server
    pub async fn complete(&self, request: OpenAiRequest) -> Result<OpenAiResponse, ProviderError> {
        let api_url = format!("{}/v1/chat/completions", self.base_url);

        let mut builder = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json");
        if !self.api_key.is_empty() {
            builder = builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = builder.json(&request).send().await.map_err(|e| {
            ProviderError::RequestFailed(format!(
                "Failed to send request to custom endpoint: {}",
                e
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Custom endpoint error ({}): {}", status, error_text);
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthenticationError(error_text));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response.json::<OpenAiResponse>().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse custom endpoint response: {}", e))
        })
    }
}

#[async_trait]
impl Provider for CustomEndpoint {
    fn name(&self) -> &'static str {
        "custom"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        let api_request = OpenAiRequest::new(&request.model)
            .add_message("user", &request.prompt)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens);

        let response = self.complete(api_request).await?;
        let text = response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ProviderError::ParseError(
                "Custom endpoint response contained no choices".to_string(),
            ));
        }

        Ok(text)
    }
}
