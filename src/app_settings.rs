use std::sync::Arc;

use anyhow::{Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, SETTINGS_STORAGE_KEY};

/// AI provider settings
/// This module handles the provider selection the orchestrator is driven by:
/// which backend to call, with which model, credential, and (for self-hosted
/// deployments) endpoint. Settings round-trip through the key-value store as
/// one JSON blob.
/// Identifier of a supported translation backend
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    // @provider: Google Gemini
    #[default]
    Gemini,
    // @provider: OpenAI
    OpenAI,
    // @provider: Anthropic
    Anthropic,
    // @provider: Custom OpenAI-compatible endpoint
    Custom,
}

impl ProviderKind {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Gemini => "Google AI",
            Self::OpenAI => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Custom => "Custom",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Gemini => "gemini".to_string(),
            Self::OpenAI => "openai".to_string(),
            Self::Anthropic => "anthropic".to_string(),
            Self::Custom => "custom".to_string(),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            "custom" => Ok(Self::Custom),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Current provider configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AiSettings {
    /// Selected backend
    #[serde(default)]
    pub provider: ProviderKind,

    /// Model identifier passed to the backend
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; may stay empty for self-hosted endpoints
    #[serde(default)]
    pub api_key: String,

    /// Endpoint URL override; required for the custom provider
    #[serde(default)]
    pub endpoint: String,
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: default_model(),
            api_key: String::new(),
            endpoint: String::new(),
        }
    }
}

impl AiSettings {
    /// Load settings from the store; a missing or unparsable blob yields the
    /// defaults rather than an error.
    pub fn load(store: &Arc<dyn KeyValueStore>) -> Self {
        match store.get(SETTINGS_STORAGE_KEY) {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Discarding corrupted settings blob: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Persist settings to the store
    pub fn save(&self, store: &Arc<dyn KeyValueStore>) {
        match serde_json::to_string(self) {
            Ok(blob) => store.set(SETTINGS_STORAGE_KEY, &blob),
            Err(e) => warn!("Failed to serialize settings: {}", e),
        }
    }

    /// Validate that the settings name a usable model
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(anyhow!("No model selected"));
        }
        Ok(())
    }
}
