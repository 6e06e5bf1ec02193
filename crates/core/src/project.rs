//! Project snapshot: export/import of the whole session.
//!
//! The snapshot is the only persistence this system has. It captures
//! the composition state plus the override store (and the last
//! assembled prompt as a convenience copy), and restores all of it
//! wholesale on import. Every field is optional on the way in: a
//! missing field falls back to its documented default, so older or
//! hand-edited project files still load. Only structurally invalid
//! JSON is an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::CameraShot;
use crate::character::Character;
use crate::dialogue::DialogueLine;
use crate::error::CoreError;
use crate::overrides::OverrideStore;
use crate::scene::Scene;
use crate::session::{
    Session, DEFAULT_PROMPT_DURATION, DEFAULT_PROMPT_OUTPUT_FORMAT, DEFAULT_PROMPT_STYLE,
};
use crate::types::Timestamp;

/// Serialized form of a whole session. Wire names are camelCase to
/// match the exported project file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSnapshot {
    /// Last assembled prompt text. Derived, not authoritative: ignored
    /// on import (the prompt is re-assembled from state on demand).
    pub prompt: Option<String>,
    pub selected_characters: Vec<String>,
    pub selected_scene: Option<String>,
    pub dialogue_sequence: Vec<DialogueLine>,
    pub camera_sequence: Vec<CameraShot>,
    pub modified_characters: HashMap<String, Character>,
    pub modified_scenes: HashMap<String, Scene>,
    pub prompt_duration: String,
    pub prompt_style: String,
    pub prompt_output_format: String,
    /// When the snapshot was taken (UTC).
    pub generated: Option<Timestamp>,
}

impl Default for ProjectSnapshot {
    fn default() -> Self {
        Self {
            prompt: None,
            selected_characters: Vec::new(),
            selected_scene: None,
            dialogue_sequence: Vec::new(),
            camera_sequence: Vec::new(),
            modified_characters: HashMap::new(),
            modified_scenes: HashMap::new(),
            prompt_duration: DEFAULT_PROMPT_DURATION.to_string(),
            prompt_style: DEFAULT_PROMPT_STYLE.to_string(),
            prompt_output_format: DEFAULT_PROMPT_OUTPUT_FORMAT.to_string(),
            generated: None,
        }
    }
}

impl ProjectSnapshot {
    /// Capture the current session and override store.
    pub fn capture(session: &Session, overrides: &OverrideStore, now: Timestamp) -> Self {
        Self {
            prompt: session.last_prompt().map(str::to_string),
            selected_characters: session.selected_characters.clone(),
            selected_scene: session.selected_scene.clone(),
            dialogue_sequence: session.dialogue_sequence.clone(),
            camera_sequence: session.camera_sequence.clone(),
            modified_characters: overrides.characters.clone(),
            modified_scenes: overrides.scenes.clone(),
            prompt_duration: session.prompt_duration.clone(),
            prompt_style: session.prompt_style.clone(),
            prompt_output_format: session.prompt_output_format.clone(),
            generated: Some(now),
        }
    }

    /// Pretty-printed JSON document for download.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// Parse an imported document.
    ///
    /// Fails only on structurally invalid JSON; missing fields default.
    /// On failure the caller keeps its current state untouched.
    pub fn from_json(document: &str) -> Result<Self, CoreError> {
        serde_json::from_str(document)
            .map_err(|e| CoreError::Parse(format!("Invalid project file: {e}")))
    }

    /// Turn the snapshot into live state, replacing the previous
    /// session and overrides wholesale.
    ///
    /// The dialogue option inventory and the remembered prompt start
    /// empty: options reload lazily, and the prompt is re-assembled
    /// when asked for. The caller must rebuild every derived view.
    pub fn apply(self) -> (Session, OverrideStore) {
        let session = Session {
            selected_characters: self.selected_characters,
            selected_scene: self.selected_scene,
            dialogue_sequence: self.dialogue_sequence,
            camera_sequence: self.camera_sequence,
            dialogue_options: Default::default(),
            prompt_duration: self.prompt_duration,
            prompt_style: self.prompt_style,
            prompt_output_format: self.prompt_output_format,
            last_prompt: None,
        };
        let overrides = OverrideStore {
            characters: self.modified_characters,
            scenes: self.modified_scenes,
        };
        (session, overrides)
    }
}

/// Download filename for a snapshot taken at `now`. The millisecond
/// timestamp keeps repeated exports from colliding.
pub fn export_file_name(now: Timestamp) -> String {
    format!(
        "cardiff-airport-veo3-project-{}.json",
        now.timestamp_millis()
    )
}
