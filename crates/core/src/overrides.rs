//! User-edit override layer over the reference catalogs.
//!
//! Edits never touch [`ReferenceData`]. Saving an edit resolves the
//! effective value at that moment, applies the changed fields onto a
//! full copy, and stores the copy here under the same key. Lookups
//! prefer the override when present. There is no revert operation:
//! an override stays for the life of the session, or until a project
//! import replaces the whole store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceData;
use crate::character::{Character, CharacterEdit};
use crate::error::CoreError;
use crate::scene::{Scene, SceneEdit};

/// Keyed overlays shadowing catalog entries.
///
/// Serialized inside the project snapshot as plain maps, so overrides
/// survive export/import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideStore {
    pub characters: HashMap<String, Character>,
    pub scenes: HashMap<String, Scene>,
}

impl OverrideStore {
    /// Effective character for `key`: the override if present, else the
    /// catalog entry.
    pub fn effective_character<'a>(
        &'a self,
        data: &'a ReferenceData,
        key: &str,
    ) -> Result<&'a Character, CoreError> {
        match self.characters.get(key) {
            Some(modified) => Ok(modified),
            None => data.character(key),
        }
    }

    /// Effective scene for `key`: the override if present, else the
    /// catalog entry.
    pub fn effective_scene<'a>(
        &'a self,
        data: &'a ReferenceData,
        key: &str,
    ) -> Result<&'a Scene, CoreError> {
        match self.scenes.get(key) {
            Some(modified) => Ok(modified),
            None => data.scene(key),
        }
    }

    /// Apply an edit to the character under `key`.
    ///
    /// The changed fields are merged onto a copy of the current
    /// effective value, last write wins. Fails with `NotFound` when the
    /// key exists in neither the catalog nor the store.
    pub fn apply_character_edit(
        &mut self,
        data: &ReferenceData,
        key: &str,
        edit: &CharacterEdit,
    ) -> Result<(), CoreError> {
        let updated = self.effective_character(data, key)?.with_edit(edit);
        self.characters.insert(key.to_string(), updated);
        Ok(())
    }

    /// Apply an edit to the scene under `key`. Same semantics as
    /// [`apply_character_edit`](Self::apply_character_edit).
    pub fn apply_scene_edit(
        &mut self,
        data: &ReferenceData,
        key: &str,
        edit: &SceneEdit,
    ) -> Result<(), CoreError> {
        let updated = self.effective_scene(data, key)?.with_edit(edit);
        self.scenes.insert(key.to_string(), updated);
        Ok(())
    }

    /// Every distinct character category across the catalog and the
    /// override store, sorted. Categories introduced only by an
    /// override are included, so the gallery filter can still offer
    /// them.
    pub fn list_distinct_categories(&self, data: &ReferenceData) -> Vec<String> {
        let mut categories: Vec<String> = data
            .characters
            .values()
            .chain(self.characters.values())
            .map(|character| character.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn character(category: &str) -> Character {
        Character {
            description: "desc".to_string(),
            voice: "voice".to_string(),
            category: category.to_string(),
            scenes: vec![],
            dialogue: vec![],
            profile_image_url: String::new(),
        }
    }

    fn data_with(names: &[(&str, &str)]) -> ReferenceData {
        let mut characters = IndexMap::new();
        for (name, category) in names {
            characters.insert(name.to_string(), character(category));
        }
        ReferenceData::new(characters, IndexMap::new())
    }

    #[test]
    fn effective_prefers_override() {
        let data = data_with(&[("Nan", "staff")]);
        let mut store = OverrideStore::default();

        store
            .apply_character_edit(
                &data,
                "Nan",
                &CharacterEdit {
                    description: Some("edited".to_string()),
                    ..CharacterEdit::default()
                },
            )
            .unwrap();

        let effective = store.effective_character(&data, "Nan").unwrap();
        assert_eq!(effective.description, "edited");
        // The catalog entry itself is untouched.
        assert_eq!(data.character("Nan").unwrap().description, "desc");
    }

    #[test]
    fn edit_of_unknown_key_is_not_found() {
        let data = data_with(&[]);
        let mut store = OverrideStore::default();
        let err = store
            .apply_character_edit(&data, "Ghost", &CharacterEdit::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn second_edit_builds_on_first() {
        let data = data_with(&[("Nan", "staff")]);
        let mut store = OverrideStore::default();

        store
            .apply_character_edit(
                &data,
                "Nan",
                &CharacterEdit {
                    voice: Some("brisker".to_string()),
                    ..CharacterEdit::default()
                },
            )
            .unwrap();
        store
            .apply_character_edit(
                &data,
                "Nan",
                &CharacterEdit {
                    category: Some("legend".to_string()),
                    ..CharacterEdit::default()
                },
            )
            .unwrap();

        let effective = store.effective_character(&data, "Nan").unwrap();
        assert_eq!(effective.voice, "brisker");
        assert_eq!(effective.category, "legend");
    }

    #[test]
    fn categories_include_override_only_values() {
        let data = data_with(&[("Nan", "staff"), ("Dai", "crew")]);
        let mut store = OverrideStore::default();

        store
            .apply_character_edit(
                &data,
                "Dai",
                &CharacterEdit {
                    category: Some("X".to_string()),
                    ..CharacterEdit::default()
                },
            )
            .unwrap();

        let categories = store.list_distinct_categories(&data);
        assert_eq!(categories, ["X", "crew", "staff"]);
    }

    #[test]
    fn categories_deduplicate() {
        let data = data_with(&[("Nan", "staff"), ("Dai", "staff")]);
        let store = OverrideStore::default();
        assert_eq!(store.list_distinct_categories(&data), ["staff"]);
    }
}
