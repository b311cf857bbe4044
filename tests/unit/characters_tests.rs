/*!
 * Tests for the character gender registry
 */

use std::sync::Arc;

use tarjoman::characters::{CharacterRegistry, Gender};
use tarjoman::storage::{CHARACTERS_STORAGE_KEY, KeyValueStore, MemoryStore};

fn shared_store() -> Arc<dyn KeyValueStore> {
    MemoryStore::shared()
}

#[test]
fn test_registry_set_shouldStoreLowercasedName() {
    let registry = CharacterRegistry::load(shared_store());
    registry.set("Maria", Gender::Female);

    assert_eq!(registry.gender_of("maria"), Some(Gender::Female));
    assert_eq!(registry.gender_of("MARIA"), Some(Gender::Female));
}

#[test]
fn test_registry_set_withSameNameDifferentCase_shouldUpdateExistingBinding() {
    let registry = CharacterRegistry::load(shared_store());
    registry.set("Maria", Gender::Female);
    registry.set("MARIA", Gender::Male);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.gender_of("maria"), Some(Gender::Male));
}

#[test]
fn test_registry_set_withEmptyName_shouldBeIgnored() {
    let registry = CharacterRegistry::load(shared_store());
    registry.set("   ", Gender::Female);

    assert!(registry.is_empty());
}

#[test]
fn test_registry_remove_shouldDeleteBinding() {
    let registry = CharacterRegistry::load(shared_store());
    registry.set("Omar", Gender::Male);
    registry.remove("OMAR");

    assert!(registry.gender_of("omar").is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_registry_persistence_shouldSurviveReload() {
    let store = MemoryStore::shared();
    {
        let registry = CharacterRegistry::load(store.clone() as Arc<dyn KeyValueStore>);
        registry.set("Maria", Gender::Female);
        registry.set("Omar", Gender::Male);
    }

    let reloaded = CharacterRegistry::load(store as Arc<dyn KeyValueStore>);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.gender_of("maria"), Some(Gender::Female));
    assert_eq!(reloaded.gender_of("omar"), Some(Gender::Male));
}

#[test]
fn test_registry_load_withCorruptedBlob_shouldStartEmpty() {
    let store = MemoryStore::shared();
    store.set(CHARACTERS_STORAGE_KEY, "[not a map]");

    let registry = CharacterRegistry::load(store as Arc<dyn KeyValueStore>);
    assert!(registry.is_empty());
}

#[test]
fn test_registry_all_shouldReturnSortedBindings() {
    let registry = CharacterRegistry::load(shared_store());
    registry.set("Zainab", Gender::Female);
    registry.set("Ahmed", Gender::Male);

    let all = registry.all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].0, "ahmed");
    assert_eq!(all[1].0, "zainab");
}

#[test]
fn test_gender_serde_shouldUseLowercaseTags() {
    assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    assert_eq!(
        serde_json::from_str::<Gender>("\"male\"").unwrap(),
        Gender::Male
    );
}
