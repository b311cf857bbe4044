/*!
 * Tests for AI settings loading, saving, and validation
 */

use std::str::FromStr;
use std::sync::Arc;

use tarjoman::app_settings::{AiSettings, ProviderKind};
use tarjoman::storage::{KeyValueStore, MemoryStore, SETTINGS_STORAGE_KEY};

fn shared_store() -> Arc<dyn KeyValueStore> {
    MemoryStore::shared()
}

#[test]
fn test_settings_default_shouldBeGeminiPro() {
    let settings = AiSettings::default();

    assert_eq!(settings.provider, ProviderKind::Gemini);
    assert_eq!(settings.model, "gemini-pro");
    assert!(settings.api_key.is_empty());
    assert!(settings.endpoint.is_empty());
}

#[test]
fn test_settings_load_withEmptyStore_shouldReturnDefaults() {
    let store = shared_store();
    let settings = AiSettings::load(&store);

    assert_eq!(settings, AiSettings::default());
}

#[test]
fn test_settings_saveAndLoad_shouldRoundTrip() {
    let store = shared_store();
    let settings = AiSettings {
        provider: ProviderKind::Anthropic,
        model: "claude-3-haiku".to_string(),
        api_key: "key-123".to_string(),
        endpoint: String::new(),
    };

    settings.save(&store);
    let loaded = AiSettings::load(&store);

    assert_eq!(loaded, settings);
}

#[test]
fn test_settings_load_withCorruptedBlob_shouldReturnDefaults() {
    let store = shared_store();
    store.set(SETTINGS_STORAGE_KEY, "{{{ not json");

    let settings = AiSettings::load(&store);

    assert_eq!(settings, AiSettings::default());
}

#[test]
fn test_settings_validate_withEmptyModel_shouldFail() {
    let settings = AiSettings {
        model: "   ".to_string(),
        ..AiSettings::default()
    };

    assert!(settings.validate().is_err());
}

#[test]
fn test_providerKind_fromStr_shouldParseLowercaseNames() {
    assert_eq!(ProviderKind::from_str("gemini").unwrap(), ProviderKind::Gemini);
    assert_eq!(ProviderKind::from_str("OpenAI").unwrap(), ProviderKind::OpenAI);
    assert_eq!(
        ProviderKind::from_str("anthropic").unwrap(),
        ProviderKind::Anthropic
    );
    assert_eq!(ProviderKind::from_str("custom").unwrap(), ProviderKind::Custom);
    assert!(ProviderKind::from_str("cohere").is_err());
}

#[test]
fn test_providerKind_display_shouldBeLowercase() {
    assert_eq!(ProviderKind::Gemini.to_string(), "gemini");
    assert_eq!(ProviderKind::OpenAI.to_string(), "openai");
    assert_eq!(ProviderKind::Anthropic.to_string(), "anthropic");
    assert_eq!(ProviderKind::Custom.to_string(), "custom");
}

#[test]
fn test_settings_serde_shouldUseLowercaseProviderTags() {
    let settings = AiSettings {
        provider: ProviderKind::OpenAI,
        model: "gpt-4".to_string(),
        api_key: String::new(),
        endpoint: String::new(),
    };

    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains("\"provider\":\"openai\""));
}
