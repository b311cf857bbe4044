/*!
 * Character registry for pronoun-consistent translation.
 *
 * Named characters are bound to a grammatical gender and injected into
 * translation prompts as hints. The registry is process-wide, mutated only by
 * explicit add/update/remove calls, and persisted as one JSON blob. The core
 * never auto-populates it from text.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::storage::{CHARACTERS_STORAGE_KEY, KeyValueStore};

/// Grammatical gender bound to a character name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lowercase label used in prompts ("male" / "female")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(anyhow::anyhow!("Invalid gender: {}", s)),
        }
    }
}

/// Registry of character names and their genders.
///
/// Names are case-insensitive: lookups, updates and removals all normalize to
/// lowercase, matching the stored blob format.
#[derive(Debug)]
pub struct CharacterRegistry {
    characters: RwLock<HashMap<String, Gender>>,
    store: Arc<dyn KeyValueStore>,
}

impl CharacterRegistry {
    /// Load the registry from the store; a missing or corrupted blob yields
    /// an empty registry.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let characters = match store.get(CHARACTERS_STORAGE_KEY) {
            Some(blob) => match serde_json::from_str::<HashMap<String, Gender>>(&blob) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Discarding corrupted character registry blob: {}", e);
                    HashMap::new()
                }
            },
            None => HashMap::new(),
        };

        Self {
            characters: RwLock::new(characters),
            store,
        }
    }

    /// Add or update a character binding
    pub fn set(&self, name: &str, gender: Gender) {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        self.characters.write().insert(key.clone(), gender);
        debug!("Registered character '{}' as {}", key, gender);
        self.persist();
    }

    /// Remove a character binding
    pub fn remove(&self, name: &str) {
        let key = name.trim().to_lowercase();
        self.characters.write().remove(&key);
        self.persist();
    }

    /// Look up the gender bound to a name, case-insensitively
    pub fn gender_of(&self, name: &str) -> Option<Gender> {
        self.characters.read().get(&name.trim().to_lowercase()).copied()
    }

    /// Snapshot of all bindings, sorted by name for stable display
    pub fn all(&self) -> Vec<(String, Gender)> {
        let mut entries: Vec<_> = self
            .characters
            .read()
            .iter()
            .map(|(name, gender)| (name.clone(), *gender))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Number of registered characters
    pub fn len(&self) -> usize {
        self.characters.read().len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.characters.read().is_empty()
    }

    /// Remove all bindings
    pub fn clear(&self) {
        self.characters.write().clear();
        self.persist();
    }

    fn persist(&self) {
        let snapshot = self.characters.read().clone();
        match serde_json::to_string(&snapshot) {
            Ok(blob) => self.store.set(CHARACTERS_STORAGE_KEY, &blob),
            Err(e) => warn!("Failed to serialize character registry: {}", e),
        }
    }
}
