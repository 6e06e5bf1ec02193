//! The mutable composition session.
//!
//! [`Session`] owns everything the user builds up between catalog load
//! and prompt generation: the character selection, the scene choice,
//! the dialogue and camera sequences, the dialogue option inventory,
//! and the three prompt configuration fields. Every mutating operation
//! keeps the structure internally consistent and returns the list of
//! derived views it invalidated, so a view layer can recompute just
//! those (or simply recompute all of them, which is equally correct).
//!
//! The session holds no catalog data. Operations that need to resolve
//! a character take [`ReferenceData`] and [`OverrideStore`] by
//! reference; there is no ambient global state anywhere.

use crate::assembler::{self, PromptToggles};
use crate::camera::{shot_template, CameraShot};
use crate::catalog::ReferenceData;
use crate::dialogue::{DialogueInventory, DialogueLine};
use crate::error::CoreError;
use crate::overrides::OverrideStore;
use crate::summary::DerivedView;

// ---------------------------------------------------------------------------
// Prompt configuration defaults
// ---------------------------------------------------------------------------

/// Default DURATION line content.
pub const DEFAULT_PROMPT_DURATION: &str = "Exactly 8 seconds";

/// Default STYLE line content.
pub const DEFAULT_PROMPT_STYLE: &str = "Professional broadcast documentary style";

/// Default OUTPUT line content.
pub const DEFAULT_PROMPT_OUTPUT_FORMAT: &str =
    "High-quality video with synchronized Welsh-accented audio";

/// First line of the seeded two-character dialogue.
pub const SEED_GREETING: &str = "Welcome to Cardiff Airport!";

/// Second line of the seeded two-character dialogue.
pub const SEED_REPLY: &str = "Thank you, lovely to be here!";

// ---------------------------------------------------------------------------
// Stale-view sets per operation family
// ---------------------------------------------------------------------------

const STALE_SELECTION: &[DerivedView] = &[
    DerivedView::Gallery,
    DerivedView::SelectionSummary,
    DerivedView::Compatibility,
    DerivedView::DialogueList,
    DerivedView::WorkflowStatus,
    DerivedView::GeneratorSummary,
    DerivedView::DashboardStats,
];

const STALE_SCENE: &[DerivedView] = &[
    DerivedView::Compatibility,
    DerivedView::WorkflowStatus,
    DerivedView::GeneratorSummary,
];

const STALE_DIALOGUE: &[DerivedView] = &[
    DerivedView::DialogueList,
    DerivedView::WorkflowStatus,
    DerivedView::GeneratorSummary,
    DerivedView::DashboardStats,
];

const STALE_CAMERA: &[DerivedView] = &[
    DerivedView::CameraList,
    DerivedView::WorkflowStatus,
    DerivedView::GeneratorSummary,
];

const STALE_CONFIG: &[DerivedView] = &[DerivedView::GeneratorSummary];

const STALE_PROMPT: &[DerivedView] = &[DerivedView::WorkflowStatus];

const STALE_NONE: &[DerivedView] = &[];

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One user's composition state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Selected character keys, in selection order, no duplicates.
    pub selected_characters: Vec<String>,
    /// At most one selected scene key.
    pub selected_scene: Option<String>,
    /// Composed dialogue lines, in sequence order.
    pub dialogue_sequence: Vec<DialogueLine>,
    /// Camera shot drafts, in sequence order. Incomplete shots stay
    /// here for editing but are dropped from the effective sequence.
    pub camera_sequence: Vec<CameraShot>,
    /// Per-character dialogue option inventory.
    pub dialogue_options: DialogueInventory,
    pub prompt_duration: String,
    pub prompt_style: String,
    pub prompt_output_format: String,
    pub(crate) last_prompt: Option<String>,
}

impl Session {
    /// Fresh session with the default prompt configuration.
    pub fn new() -> Self {
        Self {
            prompt_duration: DEFAULT_PROMPT_DURATION.to_string(),
            prompt_style: DEFAULT_PROMPT_STYLE.to_string(),
            prompt_output_format: DEFAULT_PROMPT_OUTPUT_FORMAT.to_string(),
            ..Self::default()
        }
    }

    // -- character selection -------------------------------------------------

    /// Toggle a character's membership in the selection.
    ///
    /// Adds at the end when absent, removes when present; the relative
    /// order of the remaining entries is untouched.
    pub fn toggle_character(&mut self, key: &str) -> &'static [DerivedView] {
        match self.selected_characters.iter().position(|k| k == key) {
            Some(index) => {
                self.selected_characters.remove(index);
            }
            None => self.selected_characters.push(key.to_string()),
        }
        STALE_SELECTION
    }

    /// Add every listed key that is not already selected, preserving
    /// both the existing selection order and the order of `keys`.
    pub fn select_all(&mut self, keys: &[String]) -> &'static [DerivedView] {
        for key in keys {
            if !self.selected_characters.contains(key) {
                self.selected_characters.push(key.clone());
            }
        }
        STALE_SELECTION
    }

    pub fn clear_selection(&mut self) -> &'static [DerivedView] {
        self.selected_characters.clear();
        STALE_SELECTION
    }

    // -- scene selection -----------------------------------------------------

    /// Replace the sole scene selection.
    pub fn select_scene(&mut self, key: &str) -> &'static [DerivedView] {
        self.selected_scene = Some(key.to_string());
        STALE_SCENE
    }

    // -- dialogue sequence ---------------------------------------------------

    /// Append a dialogue line.
    ///
    /// The speaker must be non-empty and resolve to an effective
    /// character; the text must be non-empty after trimming. Violations
    /// come back as `Validation` errors and leave the sequence as it
    /// was. The stored text is the trimmed form.
    pub fn append_dialogue_line(
        &mut self,
        data: &ReferenceData,
        overrides: &OverrideStore,
        speaker: &str,
        text: &str,
    ) -> Result<&'static [DerivedView], CoreError> {
        if speaker.is_empty() {
            return Err(CoreError::Validation(
                "Please select a speaker first".to_string(),
            ));
        }
        if overrides.effective_character(data, speaker).is_err() {
            return Err(CoreError::Validation(format!(
                "Unknown speaker '{speaker}'"
            )));
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(
                "Dialogue text must not be empty".to_string(),
            ));
        }

        self.dialogue_sequence
            .push(DialogueLine::new(speaker, trimmed));
        Ok(STALE_DIALOGUE)
    }

    /// Replace the dialogue sequence with the fixed two-line opener
    /// spoken by the first two selected characters.
    pub fn seed_two_character_dialogue(
        &mut self,
    ) -> Result<&'static [DerivedView], CoreError> {
        if self.selected_characters.len() < 2 {
            return Err(CoreError::Validation(
                "Please select at least 2 characters for a multi-character scene".to_string(),
            ));
        }

        self.dialogue_sequence = vec![
            DialogueLine::new(self.selected_characters[0].clone(), SEED_GREETING),
            DialogueLine::new(self.selected_characters[1].clone(), SEED_REPLY),
        ];
        Ok(STALE_DIALOGUE)
    }

    /// Replace the text of the line at `index`.
    ///
    /// Out-of-bounds indices and blank replacement text are silent
    /// no-ops (the edit dialog was cancelled or emptied).
    pub fn edit_dialogue_line_at(&mut self, index: usize, text: &str) -> &'static [DerivedView] {
        let trimmed = text.trim();
        match self.dialogue_sequence.get_mut(index) {
            Some(line) if !trimmed.is_empty() => {
                line.text = trimmed.to_string();
                STALE_DIALOGUE
            }
            _ => STALE_NONE,
        }
    }

    /// Remove the line at `index`; silent no-op out of bounds.
    pub fn remove_dialogue_line_at(&mut self, index: usize) -> &'static [DerivedView] {
        if index < self.dialogue_sequence.len() {
            self.dialogue_sequence.remove(index);
            STALE_DIALOGUE
        } else {
            STALE_NONE
        }
    }

    /// Destructively take a dialogue option from the inventory.
    ///
    /// The caller appends the returned text as a new line (via
    /// [`append_dialogue_line`](Self::append_dialogue_line)); the
    /// option itself can never be consumed twice.
    pub fn consume_dialogue_option(
        &mut self,
        key: &str,
        index: usize,
    ) -> Result<String, CoreError> {
        self.dialogue_options.consume(key, index)
    }

    // -- camera sequence -----------------------------------------------------

    /// Insert or replace the shot at `index`.
    ///
    /// An index past the end appends. Non-empty shot type / movement
    /// values must be members of the shot enums; drafts with empty
    /// fields are accepted as-is.
    pub fn upsert_camera_shot_at(
        &mut self,
        index: usize,
        shot: CameraShot,
    ) -> Result<&'static [DerivedView], CoreError> {
        shot.validate()?;
        if index < self.camera_sequence.len() {
            self.camera_sequence[index] = shot;
        } else {
            self.camera_sequence.push(shot);
        }
        Ok(STALE_CAMERA)
    }

    /// Remove the shot at `index`; silent no-op out of bounds.
    pub fn remove_camera_shot_at(&mut self, index: usize) -> &'static [DerivedView] {
        if index < self.camera_sequence.len() {
            self.camera_sequence.remove(index);
            STALE_CAMERA
        } else {
            STALE_NONE
        }
    }

    /// Replace the whole draft list with a named template.
    pub fn load_camera_template(
        &mut self,
        name: &str,
    ) -> Result<&'static [DerivedView], CoreError> {
        self.camera_sequence = shot_template(name)?;
        Ok(STALE_CAMERA)
    }

    /// The shots that count: completed drafts, in order.
    pub fn effective_camera_sequence(&self) -> Vec<&CameraShot> {
        self.camera_sequence
            .iter()
            .filter(|shot| shot.is_complete())
            .collect()
    }

    // -- prompt configuration ------------------------------------------------

    pub fn set_prompt_duration(&mut self, text: impl Into<String>) -> &'static [DerivedView] {
        self.prompt_duration = text.into();
        STALE_CONFIG
    }

    pub fn set_prompt_style(&mut self, text: impl Into<String>) -> &'static [DerivedView] {
        self.prompt_style = text.into();
        STALE_CONFIG
    }

    pub fn set_prompt_output_format(&mut self, text: impl Into<String>) -> &'static [DerivedView] {
        self.prompt_output_format = text.into();
        STALE_CONFIG
    }

    // -- prompt generation ---------------------------------------------------

    /// Assemble the prompt for the current state and remember it.
    ///
    /// The remembered text feeds the generator workflow flag and the
    /// project snapshot's convenience `prompt` field.
    pub fn generate_prompt(
        &mut self,
        data: &ReferenceData,
        overrides: &OverrideStore,
        toggles: &PromptToggles,
    ) -> Result<String, CoreError> {
        let prompt = assembler::assemble(self, data, overrides, toggles)?;
        self.last_prompt = Some(prompt.clone());
        Ok(prompt)
    }

    /// The most recently assembled prompt, if any.
    pub fn last_prompt(&self) -> Option<&str> {
        self.last_prompt.as_deref()
    }

    /// Remember an externally assembled prompt.
    pub fn record_prompt(&mut self, text: String) -> &'static [DerivedView] {
        self.last_prompt = Some(text);
        STALE_PROMPT
    }
}
