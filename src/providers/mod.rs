/*!
 * Provider implementations for different LLM backends.
 *
 * This module contains client implementations for the supported providers:
 * - Gemini: Google generative language API
 * - OpenAI: OpenAI chat completions API
 * - Anthropic: Anthropic messages API
 * - Custom: self-hosted OpenAI-compatible endpoint
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::app_settings::{AiSettings, ProviderKind};
use crate::errors::ProviderError;

/// Uniform generation request dispatched to any provider.
///
/// Adapters map this into their vendor-specific wire shape.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The full prompt text
    pub prompt: String,

    /// Model identifier understood by the backend
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// Create a new generation request with default sampling parameters
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            temperature: 0.3,
            max_tokens: 4096,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Common trait for all LLM providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the translation
/// service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Lowercase identifier of this provider, used in error reporting
    fn name(&self) -> &'static str;

    /// Generate text for the given request
    ///
    /// # Arguments
    /// * `request` - The uniform generation request
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The generated text or an error
    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError>;
}

/// Build the provider adapter selected by the given settings.
///
/// Adapters are constructed here, at configuration time, and hold only their
/// credential/endpoint; there is no lazily-initialized client state.
pub fn create_provider(settings: &AiSettings) -> Result<Box<dyn Provider>, ProviderError> {
    match settings.provider {
        ProviderKind::Gemini => Ok(Box::new(gemini::Gemini::new(
            settings.api_key.clone(),
            settings.endpoint.clone(),
        ))),
        ProviderKind::OpenAI => Ok(Box::new(openai::OpenAi::new(
            settings.api_key.clone(),
            settings.endpoint.clone(),
        ))),
        ProviderKind::Anthropic => Ok(Box::new(anthropic::Anthropic::new(
            settings.api_key.clone(),
            settings.endpoint.clone(),
        ))),
        ProviderKind::Custom => {
            let adapter =
                custom::CustomEndpoint::new(settings.api_key.clone(), settings.endpoint.clone())?;
            Ok(Box::new(adapter))
        }
    }
}

pub mod anthropic;
pub mod catalog;
pub mod custom;
pub mod gemini;
pub mod mock;
pub mod openai;
