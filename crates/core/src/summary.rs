//! Derived view fragments.
//!
//! Everything here is a pure function of the session (plus catalogs):
//! the dashboard stats, the workflow step indicators, and the short
//! summary strings shown in the generator panel. Session mutations
//! report which of these became stale via [`DerivedView`]; a view
//! layer is free to ignore the hint and recompute everything.

use serde::Serialize;

use crate::catalog::ReferenceData;
use crate::dialogue::DialogueLine;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Stale-view reporting
// ---------------------------------------------------------------------------

/// The derived views a session mutation can invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedView {
    Gallery,
    SelectionSummary,
    Compatibility,
    DialogueList,
    CameraList,
    WorkflowStatus,
    GeneratorSummary,
    DashboardStats,
}

// ---------------------------------------------------------------------------
// Workflow status
// ---------------------------------------------------------------------------

/// Completion flags for the five workflow steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowStatus {
    pub characters: bool,
    pub scene: bool,
    pub dialogue: bool,
    pub camera: bool,
    pub generator: bool,
}

impl WorkflowStatus {
    pub fn derive(session: &Session) -> Self {
        Self {
            characters: !session.selected_characters.is_empty(),
            scene: session.selected_scene.is_some(),
            dialogue: !session.dialogue_sequence.is_empty(),
            camera: !session.effective_camera_sequence().is_empty(),
            generator: session.last_prompt().is_some(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard stats
// ---------------------------------------------------------------------------

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub selected_characters: usize,
    pub dialogue_lines: usize,
    pub total_characters: usize,
    pub total_scenes: usize,
}

impl DashboardStats {
    pub fn derive(session: &Session, data: &ReferenceData) -> Self {
        Self {
            selected_characters: session.selected_characters.len(),
            dialogue_lines: session.dialogue_sequence.len(),
            total_characters: data.character_count(),
            total_scenes: data.scene_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Generator summary strings
// ---------------------------------------------------------------------------

/// Summary line for the selected characters.
pub fn characters_summary(selected: &[String]) -> String {
    match selected.len() {
        0 => "None selected".to_string(),
        1 => selected[0].clone(),
        2 | 3 => selected.join(", "),
        n => format!("{n} characters selected"),
    }
}

/// Summary line for the selected scene.
pub fn scene_summary(selected: Option<&str>) -> String {
    selected.unwrap_or("None selected").to_string()
}

/// Summary line for the dialogue sequence.
pub fn dialogue_summary(sequence: &[DialogueLine]) -> String {
    if sequence.is_empty() {
        "No dialogue composed".to_string()
    } else {
        format!("{} dialogue lines", sequence.len())
    }
}

/// Summary line for the effective camera sequence.
pub fn camera_summary(effective_shots: usize) -> String {
    if effective_shots == 0 {
        "No shots configured".to_string()
    } else {
        format!("{effective_shots} camera shots")
    }
}

/// The full generator-panel summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorSummary {
    pub characters: String,
    pub scene: String,
    pub dialogue: String,
    pub camera: String,
    pub duration: String,
    pub style: String,
    pub output: String,
}

impl GeneratorSummary {
    pub fn derive(session: &Session) -> Self {
        Self {
            characters: characters_summary(&session.selected_characters),
            scene: scene_summary(session.selected_scene.as_deref()),
            dialogue: dialogue_summary(&session.dialogue_sequence),
            camera: camera_summary(session.effective_camera_sequence().len()),
            duration: session.prompt_duration.clone(),
            style: session.prompt_style.clone(),
            output: session.prompt_output_format.clone(),
        }
    }
}
