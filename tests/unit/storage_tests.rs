/*!
 * Tests for key-value storage backends
 */

use tarjoman::storage::{JsonFileStore, KeyValueStore, MemoryStore};

#[test]
fn test_memoryStore_setAndGet_shouldRoundTrip() {
    let store = MemoryStore::new();
    store.set("key", "value");

    assert_eq!(store.get("key"), Some("value".to_string()));
}

#[test]
fn test_memoryStore_get_withMissingKey_shouldReturnNone() {
    let store = MemoryStore::new();
    assert!(store.get("missing").is_none());
}

#[test]
fn test_memoryStore_remove_shouldDeleteKey() {
    let store = MemoryStore::new();
    store.set("key", "value");
    store.remove("key");

    assert!(store.get("key").is_none());
}

#[test]
fn test_memoryStore_set_shouldOverwrite() {
    let store = MemoryStore::new();
    store.set("key", "first");
    store.set("key", "second");

    assert_eq!(store.get("key"), Some("second".to_string()));
}

#[test]
fn test_jsonFileStore_setAndGet_shouldRoundTrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();

    store.set("settings", r#"{"provider":"gemini"}"#);

    assert_eq!(
        store.get("settings"),
        Some(r#"{"provider":"gemini"}"#.to_string())
    );
}

#[test]
fn test_jsonFileStore_get_withMissingKey_shouldReturnNone() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();

    assert!(store.get("missing").is_none());
}

#[test]
fn test_jsonFileStore_shouldPersistAcrossInstances() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = JsonFileStore::new(dir.path()).unwrap();
        store.set("cache", "blob");
    }

    let reopened = JsonFileStore::new(dir.path()).unwrap();
    assert_eq!(reopened.get("cache"), Some("blob".to_string()));
}

#[test]
fn test_jsonFileStore_remove_shouldDeleteFile() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();

    store.set("cache", "blob");
    store.remove("cache");

    assert!(store.get("cache").is_none());
    // Removing a missing key is a no-op
    store.remove("cache");
}

#[test]
fn test_jsonFileStore_withUnicodePayload_shouldRoundTrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();

    let payload = r#"{"ar:en:مرحبا":{"translated_text":"hello"}}"#;
    store.set("cache", payload);

    assert_eq!(store.get("cache"), Some(payload.to_string()));
}
