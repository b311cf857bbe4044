/*!
 * Test harness around the scripted mock provider.
 *
 * Builds translation services that never touch the network and keeps handles
 * to the prompts and the call counter so tests can assert on what the
 * orchestrator actually dispatched.
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use tarjoman::app_settings::{AiSettings, ProviderKind};
use tarjoman::providers::mock::MockProvider;
use tarjoman::storage::{KeyValueStore, MemoryStore};
use tarjoman::translation::cache::TranslationCache;
use tarjoman::translation::core::TranslationService;

/// A translation service wired to a scripted mock provider
pub struct MockHarness {
    /// The service under test
    pub service: TranslationService,
    /// Every prompt the orchestrator dispatched, in call order
    pub prompts: Arc<Mutex<Vec<String>>>,
    /// Number of provider calls made
    pub calls: Arc<AtomicUsize>,
    /// The backing store shared with the service's cache
    pub store: Arc<dyn KeyValueStore>,
}

impl MockHarness {
    /// Number of provider calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of the captured prompts
    pub fn captured_prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

/// Test settings naming the mock provider's stand-in configuration
pub fn mock_settings() -> AiSettings {
    AiSettings {
        provider: ProviderKind::OpenAI,
        model: "gpt-3.5-turbo".to_string(),
        api_key: "mock-api-key".to_string(),
        endpoint: String::new(),
    }
}

/// Build a harness whose provider plays back the given responses in order.
///
/// A translate call consumes two responses: the translation itself, then the
/// word-pair JSON. Once the queue drains the provider answers with a fixed
/// fallback string.
pub fn scripted_harness(responses: &[&str]) -> MockHarness {
    scripted_harness_with_store(responses, MemoryStore::shared())
}

/// Build a harness over an existing store (to observe persistence)
pub fn scripted_harness_with_store(
    responses: &[&str],
    store: Arc<MemoryStore>,
) -> MockHarness {
    let mock = MockProvider::scripted(responses.iter().map(|r| r.to_string()).collect());
    let prompts = mock.prompts();
    let calls = mock.call_counter();

    let store: Arc<dyn KeyValueStore> = store;
    let cache = TranslationCache::load(store.clone());
    let service = TranslationService::with_provider(Box::new(mock), mock_settings(), cache);

    MockHarness {
        service,
        prompts,
        calls,
        store,
    }
}

/// Build a harness around a caller-configured mock provider
pub fn harness_with_mock(mock: MockProvider) -> MockHarness {
    let prompts = mock.prompts();
    let calls = mock.call_counter();

    let store: Arc<dyn KeyValueStore> = MemoryStore::shared();
    let cache = TranslationCache::load(store.clone());
    let service = TranslationService::with_provider(Box::new(mock), mock_settings(), cache);

    MockHarness {
        service,
        prompts,
        calls,
        store,
    }
}
