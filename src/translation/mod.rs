/*!
 * Translation pipeline built on AI providers.
 *
 * This module contains the core functionality for orchestrating translations.
 * It is split into several submodules:
 *
 * - `core`: Core translation service and request/result types
 * - `cache`: Bounded, time-expiring translation cache
 * - `style`: Heuristic writing-style analysis and auto-correction
 * - `parsing`: Word-pair extraction from model output
 * - `prompts`: Prompt construction for translation and word pairs
 */

// Re-export main types for easier usage
pub use self::cache::{CacheEntry, CacheUpdate, TranslationCache};
pub use self::core::{TranslationRequest, TranslationResult, TranslationService};
pub use self::parsing::{WordPair, parse_word_pairs};
pub use self::prompts::{TranslationPromptBuilder, word_pairs_prompt};
pub use self::style::{
    AutoCorrection, CorrectionKind, StyleAnalyzer, WritingStyle,
};

// Submodules
pub mod cache;
pub mod core;
pub mod parsing;
pub mod prompts;
pub mod style;
