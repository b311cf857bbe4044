/*!
 * Tests for the translation service orchestration
 */

use tarjoman::characters::Gender;
use tarjoman::errors::TranslationError;
use tarjoman::providers::mock::{MockFailure, MockProvider};
use tarjoman::translation::core::TranslationRequest;

use crate::common::mock_providers::{harness_with_mock, scripted_harness};

const WORD_PAIRS_JSON: &str = r#"[{"source": "good morning", "target": "صباح الخير"}]"#;

#[tokio::test]
async fn test_translate_withValidRequest_shouldReturnTranslationAndPairs() {
    let harness = scripted_harness(&["صباح الخير", WORD_PAIRS_JSON]);
    let request = TranslationRequest::new("good morning", "en", "ar");

    let result = harness.service.translate(&request).await.unwrap();

    assert_eq!(result.translated_text, "صباح الخير");
    assert!(!result.from_cache);
    assert_eq!(result.word_pairs.len(), 1);
    assert_eq!(result.word_pairs[0].source, "good morning");
    assert_eq!(harness.call_count(), 2);
}

#[tokio::test]
async fn test_translate_twice_shouldServeSecondCallFromCache() {
    let harness = scripted_harness(&["صباح الخير", WORD_PAIRS_JSON]);
    let request = TranslationRequest::new("good morning", "en", "ar");

    let first = harness.service.translate(&request).await.unwrap();
    let calls_after_first = harness.call_count();
    let second = harness.service.translate(&request).await.unwrap();

    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.translated_text, second.translated_text);
    assert_eq!(first.writing_style, second.writing_style);
    // The cached fast path must not reach the provider again
    assert_eq!(harness.call_count(), calls_after_first);
}

#[tokio::test]
async fn test_translate_withWhitespaceOnlyText_shouldFailWithoutProviderCall() {
    let harness = scripted_harness(&[]);
    let request = TranslationRequest::new("   ", "en", "ar");

    let result = harness.service.translate(&request).await;

    assert!(matches!(result, Err(TranslationError::EmptyInput)));
    assert_eq!(harness.call_count(), 0);
}

#[tokio::test]
async fn test_translate_withProviderFailure_shouldCarryProviderName() {
    let mock = MockProvider::answering("unused");
    mock.fail_next_call(MockFailure::Auth);
    let harness = harness_with_mock(mock);
    let request = TranslationRequest::new("good morning", "en", "ar");

    let result = harness.service.translate(&request).await;

    match result {
        Err(TranslationError::Provider { provider, .. }) => assert_eq!(provider, "mock"),
        other => panic!("expected provider error, got {:?}", other.map(|r| r.translated_text)),
    }
}

#[tokio::test]
async fn test_translate_withUnparsableWordPairResponse_shouldDegradeToEmptyPairs() {
    let harness = scripted_harness(&["صباح الخير", "no json in this reply"]);
    let request = TranslationRequest::new("good morning", "en", "ar");

    let result = harness.service.translate(&request).await.unwrap();

    assert_eq!(result.translated_text, "صباح الخير");
    assert!(result.word_pairs.is_empty());
}

#[tokio::test]
async fn test_translate_withCharacterGenders_shouldEmbedVerbatimHintLines() {
    let harness = scripted_harness(&["ذهبت ماريا", "[]"]);
    let request = TranslationRequest::new("Maria left", "en", "ar")
        .with_character("Maria", Gender::Female);

    harness.service.translate(&request).await.unwrap();

    let prompts = harness.captured_prompts();
    assert!(
        prompts[0].contains("- \"Maria\" is female"),
        "translation prompt should bind Maria to female, got: {}",
        prompts[0]
    );
}

#[tokio::test]
async fn test_translate_shouldEmbedStyleConstraintsInPrompt() {
    let harness = scripted_harness(&["مرحبا", "[]"]);
    let request = TranslationRequest::new("hello there, friend", "en", "ar");

    harness.service.translate(&request).await.unwrap();

    let prompts = harness.captured_prompts();
    assert!(prompts[0].contains("Match the writing style of the source text:"));
    assert!(prompts[0].contains("- Formality:"));
    assert!(prompts[0].contains("- Tone:"));
}

#[tokio::test]
async fn test_translate_shouldApplyHighConfidenceCorrections() {
    // Raw model output carries a space before the comma and period
    let harness = scripted_harness(&["hello , world .", "[]"]);
    let request = TranslationRequest::new("مرحبا يا عالم", "ar", "en");

    let result = harness.service.translate(&request).await.unwrap();

    assert_eq!(result.translated_text, "hello, world. ");
    assert!(!result.corrections.is_empty());
    assert!(result.corrections.iter().all(|c| c.confidence >= 0.8));
}

#[tokio::test]
async fn test_translate_shouldCacheCorrectedText() {
    let harness = scripted_harness(&["hello , world", "[]"]);
    let request = TranslationRequest::new("مرحبا يا عالم", "ar", "en");

    let first = harness.service.translate(&request).await.unwrap();
    let second = harness.service.translate(&request).await.unwrap();

    // The cache stores the corrected text, not the raw provider output
    assert_eq!(first.translated_text, "hello, world");
    assert_eq!(second.translated_text, "hello, world");
    assert!(second.from_cache);
}

#[tokio::test]
async fn test_translate_cacheHit_shouldReturnEmptyPairsAndCorrections() {
    let harness = scripted_harness(&["صباح الخير", WORD_PAIRS_JSON]);
    let request = TranslationRequest::new("good morning", "en", "ar");

    let first = harness.service.translate(&request).await.unwrap();
    let second = harness.service.translate(&request).await.unwrap();

    assert_eq!(first.word_pairs.len(), 1);
    assert!(second.word_pairs.is_empty());
    assert!(second.corrections.is_empty());
}

#[tokio::test]
async fn test_translate_secondPrompt_shouldRequestWordPairs() {
    let harness = scripted_harness(&["صباح الخير", WORD_PAIRS_JSON]);
    let request = TranslationRequest::new("good morning", "en", "ar");

    harness.service.translate(&request).await.unwrap();

    let prompts = harness.captured_prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("JSON array of important word pairs"));
    assert!(prompts[1].contains("maximum 10 pairs"));
}

#[test]
fn test_translationRequest_withCharacter_shouldReplaceCaseInsensitively() {
    let request = TranslationRequest::new("text", "en", "ar")
        .with_character("Maria", Gender::Male)
        .with_character("MARIA", Gender::Female);

    assert_eq!(request.character_genders.len(), 1);
    assert_eq!(request.character_genders[0].0, "MARIA");
    assert_eq!(request.character_genders[0].1, Gender::Female);
}
