//! Scene catalog entry and edit payload.

use serde::{Deserialize, Serialize};

/// One entry in the scene catalog.
///
/// Field names match the `scenes.json` document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Full scene description fed to the CONTEXT section of the
    /// assembled prompt.
    pub description: String,
    /// Short one-line blurb shown on the scene card.
    pub subtitle: String,
    /// Optional atmosphere note.
    #[serde(default)]
    pub atmosphere: Option<String>,
    /// Icon identifier for the scene card.
    #[serde(default)]
    pub icon: String,
}

/// Partial update for a scene, as produced by the edit form.
#[derive(Debug, Clone, Default)]
pub struct SceneEdit {
    pub description: Option<String>,
    pub subtitle: Option<String>,
    pub atmosphere: Option<String>,
}

impl Scene {
    /// Build the replacement value for an edit: a clone of `self` with
    /// every `Some` field of the edit swapped in.
    pub fn with_edit(&self, edit: &SceneEdit) -> Scene {
        let mut updated = self.clone();
        if let Some(description) = &edit.description {
            updated.description = description.clone();
        }
        if let Some(subtitle) = &edit.subtitle {
            updated.subtitle = subtitle.clone();
        }
        if let Some(atmosphere) = &edit.atmosphere {
            updated.atmosphere = Some(atmosphere.clone());
        }
        updated
    }
}
