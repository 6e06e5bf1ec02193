//! Character catalog entry and edit payload.

use serde::{Deserialize, Serialize};

use crate::types::SceneKey;

/// One entry in the character catalog.
///
/// Field names match the `characters.json` document shape, so catalog
/// documents and project snapshots deserialize without renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Full on-screen description fed to the SUBJECT / ENSEMBLE CAST
    /// sections of the assembled prompt.
    pub description: String,
    /// Voice profile text (accent, register, pacing).
    pub voice: String,
    /// Free-form category label used by the gallery filter.
    pub category: String,
    /// Scenes this character is compatible with, by scene key.
    #[serde(default)]
    pub scenes: Vec<SceneKey>,
    /// Sample dialogue lines, the fallback source for the dialogue
    /// option inventory.
    #[serde(default)]
    pub dialogue: Vec<String>,
    /// Portrait image URL for the gallery card.
    #[serde(default)]
    pub profile_image_url: String,
}

/// Partial update for a character, as produced by the edit form.
///
/// `None` fields keep the current effective value. Applying an edit
/// never mutates the catalog entry; it produces a full replacement
/// value for the override store.
#[derive(Debug, Clone, Default)]
pub struct CharacterEdit {
    pub description: Option<String>,
    pub voice: Option<String>,
    pub category: Option<String>,
    pub scenes: Option<Vec<SceneKey>>,
    pub dialogue: Option<Vec<String>>,
}

impl Character {
    /// Build the replacement value for an edit: a clone of `self` with
    /// every `Some` field of the edit swapped in.
    pub fn with_edit(&self, edit: &CharacterEdit) -> Character {
        let mut updated = self.clone();
        if let Some(description) = &edit.description {
            updated.description = description.clone();
        }
        if let Some(voice) = &edit.voice {
            updated.voice = voice.clone();
        }
        if let Some(category) = &edit.category {
            updated.category = category.clone();
        }
        if let Some(scenes) = &edit.scenes {
            updated.scenes = scenes.clone();
        }
        if let Some(dialogue) = &edit.dialogue {
            updated.dialogue = dialogue.clone();
        }
        updated
    }
}
