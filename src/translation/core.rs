/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct, which is
 * responsible for orchestrating a translation: cache lookup, style analysis,
 * prompt construction, provider dispatch, word-pair extraction, the
 * auto-correction pass, and the cache write-through.
 */

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use crate::app_settings::AiSettings;
use crate::characters::Gender;
use crate::errors::TranslationError;
use crate::providers::{GenerationRequest, Provider, create_provider};
use crate::storage::KeyValueStore;
use crate::translation::cache::{CacheUpdate, TranslationCache};
use crate::translation::parsing::{WordPair, parse_word_pairs};
use crate::translation::prompts::{TranslationPromptBuilder, word_pairs_prompt};
use crate::translation::style::{AutoCorrection, StyleAnalyzer, WritingStyle};

/// Sampling temperature used for translation requests
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// A single translation request.
///
/// Immutable per call; character names keep the caller's casing (it is what
/// the prompt renders) while binding updates match case-insensitively.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Text to translate
    pub source_text: String,

    /// Source language code
    pub source_language: String,

    /// Target language code
    pub target_language: String,

    /// Character gender hints injected into the prompt
    pub character_genders: Vec<(String, Gender)>,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(source_text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            source_text: source_text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            character_genders: Vec::new(),
        }
    }

    /// Add or replace a character gender hint (name matched case-insensitively)
    pub fn with_character(mut self, name: &str, gender: Gender) -> Self {
        let lowered = name.to_lowercase();
        self.character_genders
            .retain(|(existing, _)| existing.to_lowercase() != lowered);
        self.character_genders.push((name.to_string(), gender));
        self
    }

    /// Add several character gender hints at once
    pub fn with_characters<I>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = (String, Gender)>,
    {
        for (name, gender) in characters {
            self = self.with_character(&name, gender);
        }
        self
    }
}

/// Result of a translation call
#[derive(Debug, Clone, Serialize)]
pub struct TranslationResult {
    /// Final translated text, after auto-corrections
    pub translated_text: String,

    /// Word-alignment pairs, possibly empty
    pub word_pairs: Vec<WordPair>,

    /// Every proposed correction, applied or not
    pub corrections: Vec<AutoCorrection>,

    /// Style profile of the translated text
    pub writing_style: WritingStyle,

    /// Whether the result was served from the cache
    pub from_cache: bool,
}

/// Main translation service orchestrating cache, analyzer and provider
pub struct TranslationService {
    /// Provider adapter, rebuilt when settings change
    provider: Box<dyn Provider>,

    /// Current provider settings
    settings: AiSettings,

    /// Style analyzer used before and after translation
    analyzer: StyleAnalyzer,

    /// Translation cache for storing and retrieving translations
    pub cache: TranslationCache,
}

impl TranslationService {
    /// Create a new translation service with the given settings.
    ///
    /// The provider adapter is constructed here, once; configuration problems
    /// (no model selected, custom provider without an endpoint) surface as
    /// `TranslationError::NotConfigured` before any request is made.
    pub fn new(
        settings: AiSettings,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, TranslationError> {
        settings
            .validate()
            .map_err(|e| TranslationError::NotConfigured(e.to_string()))?;
        let provider = create_provider(&settings)
            .map_err(|e| TranslationError::NotConfigured(e.to_string()))?;

        Ok(Self {
            provider,
            settings,
            analyzer: StyleAnalyzer::new(),
            cache: TranslationCache::load(store),
        })
    }

    /// Create a service around an existing provider adapter and cache.
    /// Used by tests to inject scripted providers.
    pub fn with_provider(
        provider: Box<dyn Provider>,
        settings: AiSettings,
        cache: TranslationCache,
    ) -> Self {
        Self {
            provider,
            settings,
            analyzer: StyleAnalyzer::new(),
            cache,
        }
    }

    /// Current provider settings
    pub fn settings(&self) -> &AiSettings {
        &self.settings
    }

    /// Replace the settings and rebuild the provider adapter
    pub fn update_settings(&mut self, settings: AiSettings) -> Result<(), TranslationError> {
        settings
            .validate()
            .map_err(|e| TranslationError::NotConfigured(e.to_string()))?;
        self.provider = create_provider(&settings)
            .map_err(|e| TranslationError::NotConfigured(e.to_string()))?;
        self.settings = settings;
        Ok(())
    }

    /// Translate a request.
    ///
    /// The cache is the sole fast path: a live entry returns immediately with
    /// `from_cache = true` and neither the analyzer nor the provider runs.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        if request.source_text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let (text, from, to) = (
            request.source_text.as_str(),
            request.source_language.as_str(),
            request.target_language.as_str(),
        );

        if let Some(entry) = self.cache.get(text, from, to) {
            return Ok(TranslationResult {
                translated_text: entry.translated_text,
                word_pairs: Vec::new(),
                corrections: Vec::new(),
                writing_style: entry.writing_style,
                from_cache: true,
            });
        }

        let source_style = self.analyzer.analyze_style(text);
        let prompt = TranslationPromptBuilder::new(from, to)
            .with_style(source_style)
            .with_character_genders(&request.character_genders)
            .build(text);

        let raw = self
            .generate(&prompt)
            .await
            .map_err(|e| TranslationError::from_provider(self.provider.name(), e))?;
        let raw = raw.trim().to_string();

        let word_pairs = self.fetch_word_pairs(text, &raw, from, to).await;

        let (final_text, corrections) = self.analyzer.apply_corrections(&raw, to);
        let target_style = self.analyzer.analyze_style(&final_text);

        self.cache.set(
            text,
            from,
            to,
            CacheUpdate {
                translated_text: final_text.clone(),
                writing_style: target_style,
                provider: self.settings.provider.to_lowercase_string(),
                model: self.settings.model.clone(),
            },
        );

        Ok(TranslationResult {
            translated_text: final_text,
            word_pairs,
            corrections,
            writing_style: target_style,
            from_cache: false,
        })
    }

    /// Ask the provider for word-alignment pairs.
    ///
    /// Word pairs are an enhancement: provider or parse failures degrade to
    /// an empty list instead of failing the translation.
    async fn fetch_word_pairs(
        &self,
        source_text: &str,
        translated_text: &str,
        from: &str,
        to: &str,
    ) -> Vec<WordPair> {
        let prompt = word_pairs_prompt(source_text, translated_text, from, to);
        match self.generate(&prompt).await {
            Ok(response) => parse_word_pairs(&response),
            Err(e) => {
                warn!("Word-pair extraction failed, continuing without: {}", e);
                Vec::new()
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, crate::errors::ProviderError> {
        debug!(
            "Dispatching prompt to {} ({} chars)",
            self.provider.name(),
            prompt.chars().count()
        );
        let request = GenerationRequest::new(&self.settings.model, prompt)
            .temperature(DEFAULT_TEMPERATURE)
            .max_tokens(Self::max_tokens_for_model(&self.settings.model));
        self.provider.generate(request).await
    }

    /// Get the maximum number of tokens to request for a given model
    fn max_tokens_for_model(model: &str) -> u32 {
        match model {
            // OpenAI models
            "gpt-4" => 8192,
            "gpt-4-32k" => 32768,
            "gpt-4-turbo-preview" | "gpt-4-vision-preview" => 4096,
            "gpt-3.5-turbo" => 4096,
            "gpt-3.5-turbo-16k" => 16384,

            // Anthropic models
            "claude-3-opus" | "claude-3-sonnet" | "claude-3-haiku" => 4096,
            "claude-2.1" | "claude-instant-1.2" => 4096,

            // Default for Gemini and unknown models
            _ => 2048,
        }
    }
}
