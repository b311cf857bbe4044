/*!
 * Tests for the static provider catalog
 */

use tarjoman::app_settings::ProviderKind;
use tarjoman::providers::catalog::{provider_info, provider_models, supports_custom_models};

#[test]
fn test_catalog_providerModels_shouldListPublishedModels() {
    let models = provider_models(ProviderKind::OpenAI);

    assert!(models.contains(&"gpt-4"));
    assert!(models.contains(&"gpt-3.5-turbo"));
}

#[test]
fn test_catalog_providerModels_withCustomProvider_shouldBeEmpty() {
    assert!(provider_models(ProviderKind::Custom).is_empty());
}

#[test]
fn test_catalog_supportsCustomModels_shouldBeTrueForEveryProvider() {
    for kind in [
        ProviderKind::Gemini,
        ProviderKind::OpenAI,
        ProviderKind::Anthropic,
        ProviderKind::Custom,
    ] {
        assert!(supports_custom_models(kind));
    }
}

#[test]
fn test_catalog_providerInfo_shouldCarryDisplayNames() {
    assert_eq!(provider_info(ProviderKind::Gemini).name, "Google AI");
    assert_eq!(provider_info(ProviderKind::Anthropic).name, "Anthropic");
}

#[test]
fn test_catalog_geminiModels_shouldIncludeDefaultModel() {
    assert!(provider_models(ProviderKind::Gemini).contains(&"gemini-pro"));
}
