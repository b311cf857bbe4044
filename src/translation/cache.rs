/*!
 * Translation caching functionality.
 *
 * Translations are memoized under a (source language, target language, exact
 * text) key with a fixed expiry window and a bounded entry count. The whole
 * cache is written through to the key-value store on every mutation, and a
 * corrupted stored blob degrades to an empty cache.
 */

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::storage::{CACHE_STORAGE_KEY, KeyValueStore};
use crate::translation::style::WritingStyle;

/// Maximum number of live cache entries
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// Entry lifetime in milliseconds (24 hours)
pub const DEFAULT_EXPIRY_MS: i64 = 24 * 60 * 60 * 1000;

/// A cached translation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The source text, exactly as translated
    pub original_text: String,

    /// The final translated text
    pub translated_text: String,

    /// Style profile of the translated text
    pub writing_style: WritingStyle,

    /// Provider that produced the translation
    pub provider: String,

    /// Model that produced the translation
    pub model: String,

    /// Creation timestamp, epoch milliseconds
    pub created_at: i64,
}

/// Payload for a cache write; the cache stamps `created_at` itself
#[derive(Debug, Clone)]
pub struct CacheUpdate {
    /// The final translated text
    pub translated_text: String,

    /// Style profile of the translated text
    pub writing_style: WritingStyle,

    /// Provider that produced the translation
    pub provider: String,

    /// Model that produced the translation
    pub model: String,
}

/// Translation cache with lazy expiry and oldest-first eviction
#[derive(Debug)]
pub struct TranslationCache {
    /// Internal cache storage
    entries: RwLock<HashMap<String, CacheEntry>>,

    /// Write-through persistence target
    store: Arc<dyn KeyValueStore>,

    /// Maximum number of entries retained after a write
    max_size: usize,

    /// Entry lifetime in milliseconds
    expiry_ms: i64,
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

impl TranslationCache {
    /// Load the cache from the store with default limits, sweeping expired
    /// entries immediately.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_limits(store, DEFAULT_MAX_SIZE, DEFAULT_EXPIRY_MS)
    }

    /// Load the cache with explicit limits
    pub fn with_limits(store: Arc<dyn KeyValueStore>, max_size: usize, expiry_ms: i64) -> Self {
        let mut entries = match store.get(CACHE_STORAGE_KEY) {
            Some(blob) => match serde_json::from_str::<HashMap<String, CacheEntry>>(&blob) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Discarding corrupted translation cache blob: {}", e);
                    HashMap::new()
                }
            },
            None => HashMap::new(),
        };

        // Eager sweep on load; reads still expire lazily afterwards
        let now = now_ms();
        let before = entries.len();
        entries.retain(|_, entry| now - entry.created_at <= expiry_ms);
        let swept = before - entries.len();

        let cache = Self {
            entries: RwLock::new(entries),
            store,
            max_size,
            expiry_ms,
        };
        if swept > 0 {
            debug!("Swept {} expired translation cache entries on load", swept);
            cache.persist();
        }
        cache
    }

    fn cache_key(text: &str, from: &str, to: &str) -> String {
        format!("{}:{}:{}", from, to, text)
    }

    /// Get a cached translation, deleting it first if it has expired
    pub fn get(&self, text: &str, from: &str, to: &str) -> Option<CacheEntry> {
        let key = Self::cache_key(text, from, to);

        let entry = self.entries.read().get(&key).cloned();
        let Some(entry) = entry else {
            debug!(
                "Cache miss for '{}' ({} -> {})",
                truncate_text(text, 30),
                from,
                to
            );
            return None;
        };

        if now_ms() - entry.created_at > self.expiry_ms {
            self.entries.write().remove(&key);
            self.persist();
            debug!("Expired cache entry for '{}'", truncate_text(text, 30));
            return None;
        }

        debug!(
            "Cache hit for '{}' ({} -> {})",
            truncate_text(text, 30),
            from,
            to
        );
        Some(entry)
    }

    /// Store a translation, evicting the oldest entries beyond the size cap
    pub fn set(&self, text: &str, from: &str, to: &str, update: CacheUpdate) {
        let key = Self::cache_key(text, from, to);
        let entry = CacheEntry {
            original_text: text.to_string(),
            translated_text: update.translated_text,
            writing_style: update.writing_style,
            provider: update.provider,
            model: update.model,
            created_at: now_ms(),
        };

        {
            let mut entries = self.entries.write();
            entries.insert(key, entry);

            if entries.len() > self.max_size {
                let mut by_age: Vec<(String, i64)> = entries
                    .iter()
                    .map(|(k, e)| (k.clone(), e.created_at))
                    .collect();
                by_age.sort_by_key(|(_, created_at)| *created_at);

                let excess = entries.len() - self.max_size;
                for (old_key, _) in by_age.into_iter().take(excess) {
                    entries.remove(&old_key);
                }
                debug!("Evicted {} oldest translation cache entries", excess);
            }
        }

        self.persist();
        debug!(
            "Cached translation for '{}' ({} -> {})",
            truncate_text(text, 30),
            from,
            to
        );
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.entries.write().clear();
        self.persist();
        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn persist(&self) {
        let snapshot = self.entries.read().clone();
        match serde_json::to_string(&snapshot) {
            Ok(blob) => self.store.set(CACHE_STORAGE_KEY, &blob),
            Err(e) => warn!("Failed to serialize translation cache: {}", e),
        }
    }
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_length).collect::<String>())
    }
}
