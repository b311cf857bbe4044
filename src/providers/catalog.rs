/*!
 * Static catalog of providers and their published models.
 *
 * Read-only configuration loaded once at process start; the UI layer uses it
 * to populate model pickers and to decide whether a free-form model name is
 * allowed for the selected provider.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::app_settings::ProviderKind;

/// A model published by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model identifier passed on the wire
    pub id: &'static str,
    /// Human-readable model name
    pub name: &'static str,
}

/// Catalog entry for one provider
#[derive(Debug, Clone, Copy)]
pub struct ProviderInfo {
    /// Human-readable provider name
    pub name: &'static str,
    /// Published models, in display order
    pub models: &'static [ModelInfo],
    /// Whether the provider accepts model names outside this list
    pub custom_model_support: bool,
}

static GEMINI_MODELS: &[ModelInfo] = &[
    ModelInfo { id: "gemini-pro", name: "Gemini Pro" },
    ModelInfo { id: "gemini-pro-vision", name: "Gemini Pro Vision" },
    ModelInfo { id: "text-bison", name: "Text Bison" },
    ModelInfo { id: "chat-bison", name: "Chat Bison" },
    ModelInfo { id: "code-bison", name: "Code Bison" },
];

static OPENAI_MODELS: &[ModelInfo] = &[
    ModelInfo { id: "gpt-4-turbo-preview", name: "GPT-4 Turbo" },
    ModelInfo { id: "gpt-4-vision-preview", name: "GPT-4 Vision" },
    ModelInfo { id: "gpt-4", name: "GPT-4" },
    ModelInfo { id: "gpt-3.5-turbo", name: "GPT-3.5 Turbo" },
    ModelInfo { id: "gpt-3.5-turbo-16k", name: "GPT-3.5 Turbo 16K" },
];

static ANTHROPIC_MODELS: &[ModelInfo] = &[
    ModelInfo { id: "claude-3-opus", name: "Claude 3 Opus" },
    ModelInfo { id: "claude-3-sonnet", name: "Claude 3 Sonnet" },
    ModelInfo { id: "claude-3-haiku", name: "Claude 3 Haiku" },
    ModelInfo { id: "claude-2.1", name: "Claude 2.1" },
    ModelInfo { id: "claude-instant-1.2", name: "Claude Instant" },
];

static CATALOG: Lazy<HashMap<ProviderKind, ProviderInfo>> = Lazy::new(|| {
    HashMap::from([
        (
            ProviderKind::Gemini,
            ProviderInfo {
                name: "Google AI",
                models: GEMINI_MODELS,
                custom_model_support: true,
            },
        ),
        (
            ProviderKind::OpenAI,
            ProviderInfo {
                name: "OpenAI",
                models: OPENAI_MODELS,
                custom_model_support: true,
            },
        ),
        (
            ProviderKind::Anthropic,
            ProviderInfo {
                name: "Anthropic",
                models: ANTHROPIC_MODELS,
                custom_model_support: true,
            },
        ),
        (
            ProviderKind::Custom,
            ProviderInfo {
                name: "Custom",
                models: &[],
                custom_model_support: true,
            },
        ),
    ])
});

/// Catalog entry for a provider
pub fn provider_info(provider: ProviderKind) -> &'static ProviderInfo {
    CATALOG
        .get(&provider)
        .expect("catalog covers every ProviderKind")
}

/// Model identifiers published by a provider
pub fn provider_models(provider: ProviderKind) -> Vec<&'static str> {
    provider_info(provider).models.iter().map(|m| m.id).collect()
}

/// Whether the provider accepts model names outside its published list
pub fn supports_custom_models(provider: ProviderKind) -> bool {
    provider_info(provider).custom_model_support
}
