/*!
 * Key-value persistence for the translation core.
 *
 * The cache, the character registry, and the AI settings are each serialized
 * as a single JSON blob under a fixed key. The store is deliberately
 * forgiving: writes are best-effort (failures are logged, never fatal) and an
 * unreadable or corrupted blob reads back as absent.
 */

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;

/// Storage key for the translation cache blob
pub const CACHE_STORAGE_KEY: &str = "translation_cache";

/// Storage key for the character registry blob
pub const CHARACTERS_STORAGE_KEY: &str = "translation_characters";

/// Storage key for the AI settings blob
pub const SETTINGS_STORAGE_KEY: &str = "ai_settings";

/// A string-blob key-value store.
///
/// Implementations must tolerate concurrent callers; a whole-blob write is the
/// unit of atomicity the rest of the core relies on.
pub trait KeyValueStore: Send + Sync + Debug {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous blob
    fn set(&self, key: &str, value: &str);

    /// Remove the blob stored under `key`
    fn remove(&self, key: &str);
}

/// File-backed store writing one JSON file per key beneath a base directory
#[derive(Debug)]
pub struct JsonFileStore {
    /// Directory holding one `<key>.json` file per key
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new(base_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Create a store under the user's configuration directory
    pub fn in_user_config_dir() -> std::io::Result<Self> {
        let base_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tarjoman");
        Self::new(base_dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read stored blob '{}': {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Err(e) = fs::write(&path, value) {
            warn!("Failed to persist blob '{}' to {:?}: {}", key, path, e);
        } else {
            debug!("Persisted blob '{}' ({} bytes)", key, value.len());
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to remove stored blob '{}': {}", key, e);
            }
        }
    }
}

/// In-memory store used by tests and ephemeral hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty in-memory store behind an `Arc`, ready to share
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}
