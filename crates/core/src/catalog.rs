//! Immutable reference catalogs.
//!
//! [`ReferenceData`] holds the two catalogs loaded once at startup.
//! It is never mutated afterwards: user edits live in the override
//! store and shadow these entries without touching them. Iteration
//! order is always the catalog document order, which is why the maps
//! are [`IndexMap`]s rather than hash maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::CoreError;
use crate::scene::Scene;

/// The two reference catalogs, keyed by display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub characters: IndexMap<String, Character>,
    pub scenes: IndexMap<String, Scene>,
}

impl ReferenceData {
    pub fn new(characters: IndexMap<String, Character>, scenes: IndexMap<String, Scene>) -> Self {
        Self { characters, scenes }
    }

    /// Look up a catalog character, without considering overrides.
    pub fn character(&self, key: &str) -> Result<&Character, CoreError> {
        self.characters.get(key).ok_or_else(|| CoreError::NotFound {
            entity: "character",
            key: key.to_string(),
        })
    }

    /// Look up a catalog scene, without considering overrides.
    pub fn scene(&self, key: &str) -> Result<&Scene, CoreError> {
        self.scenes.get(key).ok_or_else(|| CoreError::NotFound {
            entity: "scene",
            key: key.to_string(),
        })
    }

    /// Character keys in catalog document order.
    pub fn character_keys(&self) -> impl Iterator<Item = &String> {
        self.characters.keys()
    }

    /// Scene keys in catalog document order.
    pub fn scene_keys(&self) -> impl Iterator<Item = &String> {
        self.scenes.keys()
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_unknown_character_is_not_found() {
        let data = ReferenceData::default();
        let err = data.character("Nobody").unwrap_err();
        assert!(err.to_string().contains("character 'Nobody'"));
    }

    #[test]
    fn key_order_follows_document_order() {
        // Parsed from text rather than via `json!` so the document's
        // key order reaches the IndexMap intact.
        let doc = r#"{
            "characters": {
                "Zara": {"description": "d", "voice": "v", "category": "c"},
                "Alys": {"description": "d", "voice": "v", "category": "c"},
                "Meirion": {"description": "d", "voice": "v", "category": "c"}
            },
            "scenes": {}
        }"#;

        let data: ReferenceData = serde_json::from_str(doc).unwrap();
        let keys: Vec<&String> = data.character_keys().collect();
        assert_eq!(keys, ["Zara", "Alys", "Meirion"]);
    }
}
