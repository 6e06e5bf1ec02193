//! Deterministic prompt assembly.
//!
//! [`assemble`] linearizes the session into the final VEO3 prompt
//! text: fixed header, subject or ensemble cast block, scene context,
//! optional dialogue and camera blocks, the three configuration lines,
//! and the toggled voice / ensemble-direction / broadcast-quality
//! sections. Identical inputs always produce identical text.

use crate::catalog::ReferenceData;
use crate::error::CoreError;
use crate::overrides::OverrideStore;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Fixed literals
// ---------------------------------------------------------------------------

/// Brand header, always the first line of the prompt.
pub const PROMPT_HEADER: &str = "Cardiff Airport TV - [@airporttv logo - top right]";

/// Fallback camera line used when no complete shot is configured.
pub const CAMERA_FALLBACK: &str =
    "CAMERA: Medium shot with natural movement, professional cinematography";

/// Direction paragraph added for multi-character prompts.
pub const ENSEMBLE_DIRECTION: &str = "ENSEMBLE DIRECTION: Balance all characters naturally, \
     ensure clear audio separation between speakers, maintain Cardiff Airport atmosphere \
     throughout";

/// Broadcast-quality paragraph.
pub const BROADCAST_QUALITY: &str = "BROADCAST QUALITY: Professional TV production standards, \
     suitable for Cardiff Airport TV broadcast, crisp audio, stable footage";

// ---------------------------------------------------------------------------
// Toggles
// ---------------------------------------------------------------------------

/// The three optional prompt sections. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptToggles {
    /// Emit one `name voice : profile` line per selected character.
    pub include_voice: bool,
    /// Emit the ensemble-direction paragraph (multi-character only).
    pub include_ensemble_direction: bool,
    /// Emit the broadcast-quality paragraph.
    pub include_broadcast_quality: bool,
}

impl Default for PromptToggles {
    fn default() -> Self {
        Self {
            include_voice: true,
            include_ensemble_direction: true,
            include_broadcast_quality: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Assemble the prompt text for the current session.
///
/// Fails with a `Validation` error when no character or no scene is
/// selected; selected keys that resolve to nothing come back as
/// `NotFound`. Characters and dialogue lines are emitted in their
/// stored order, camera shots in draft order after the completeness
/// filter.
pub fn assemble(
    session: &Session,
    data: &ReferenceData,
    overrides: &OverrideStore,
    toggles: &PromptToggles,
) -> Result<String, CoreError> {
    if session.selected_characters.is_empty() || session.selected_scene.is_none() {
        return Err(CoreError::Validation(
            "Please select at least one character and a scene to generate a prompt".to_string(),
        ));
    }

    let scene_key = session.selected_scene.as_deref().unwrap_or_default();
    let scene = overrides.effective_scene(data, scene_key)?;

    let mut prompt = format!("{PROMPT_HEADER}\n\n");

    // Subject block: single character or ensemble cast.
    if session.selected_characters.len() == 1 {
        let character = overrides.effective_character(data, &session.selected_characters[0])?;
        prompt.push_str(&format!("SUBJECT: {}\n\n", character.description));
    } else {
        prompt.push_str("ENSEMBLE CAST:\n");
        for name in &session.selected_characters {
            let character = overrides.effective_character(data, name)?;
            prompt.push_str(&format!("{name}: {}\n", character.description));
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!("CONTEXT: {}\n\n", scene.description));

    if !session.dialogue_sequence.is_empty() {
        prompt.push_str("DIALOGUE SEQUENCE:\n");
        for line in &session.dialogue_sequence {
            prompt.push_str(&format!("{}: \"{}\"\n", line.speaker, line.text));
        }
        prompt.push('\n');
    }

    let shots = session.effective_camera_sequence();
    if !shots.is_empty() {
        prompt.push_str("CAMERA SEQUENCE:\n");
        for (index, shot) in shots.iter().enumerate() {
            prompt.push_str(&format!(
                "Shot {}: {} {}",
                index + 1,
                shot.shot_type,
                shot.movement
            ));
            if !shot.description.is_empty() {
                prompt.push_str(&format!(" - {}", shot.description));
            }
            prompt.push('\n');
        }
    } else {
        prompt.push_str(&format!("{CAMERA_FALLBACK}\n"));
    }

    prompt.push_str(&format!("\nDURATION: {}\n", session.prompt_duration));
    prompt.push_str(&format!("STYLE: {}\n", session.prompt_style));
    prompt.push_str(&format!("OUTPUT: {}\n", session.prompt_output_format));

    if toggles.include_voice {
        if session.selected_characters.is_empty() {
            // Unreachable behind the precondition, but kept as a guard.
            tracing::warn!("voice section requested with no characters selected");
        }
        for name in &session.selected_characters {
            let character = overrides.effective_character(data, name)?;
            prompt.push_str(&format!("{name} voice : {}\n", character.voice));
        }
    }

    if toggles.include_ensemble_direction && session.selected_characters.len() > 1 {
        prompt.push_str(&format!("\n{ENSEMBLE_DIRECTION}\n"));
    }

    if toggles.include_broadcast_quality {
        prompt.push_str(&format!("\n{BROADCAST_QUALITY}\n"));
    }

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraShot, MOVEMENT_PAN, MOVEMENT_STATIC, SHOT_CLOSE_UP, SHOT_WIDE};
    use crate::character::Character;
    use crate::scene::Scene;
    use indexmap::IndexMap;

    fn data() -> ReferenceData {
        let mut characters = IndexMap::new();
        characters.insert(
            "A".to_string(),
            Character {
                description: "D".to_string(),
                voice: "Lilting valleys accent".to_string(),
                category: "staff".to_string(),
                scenes: vec!["S".to_string()],
                dialogue: vec![],
                profile_image_url: String::new(),
            },
        );
        characters.insert(
            "B".to_string(),
            Character {
                description: "Second description".to_string(),
                voice: "Gruff harbour accent".to_string(),
                category: "crew".to_string(),
                scenes: vec![],
                dialogue: vec![],
                profile_image_url: String::new(),
            },
        );

        let mut scenes = IndexMap::new();
        scenes.insert(
            "S".to_string(),
            Scene {
                description: "C".to_string(),
                subtitle: "sub".to_string(),
                atmosphere: None,
                icon: String::new(),
            },
        );
        ReferenceData::new(characters, scenes)
    }

    fn single_character_session() -> Session {
        let mut session = Session::new();
        session.toggle_character("A");
        session.select_scene("S");
        session
    }

    #[test]
    fn single_character_full_toggle_prompt() {
        let session = single_character_session();
        let prompt = assemble(
            &session,
            &data(),
            &OverrideStore::default(),
            &PromptToggles::default(),
        )
        .unwrap();

        assert!(prompt.starts_with(&format!("{PROMPT_HEADER}\n\n")));
        assert!(prompt.contains("SUBJECT: D\n"));
        assert!(prompt.contains("CONTEXT: C\n"));
        assert!(prompt.contains(&format!("{CAMERA_FALLBACK}\n")));
        assert!(prompt.contains("A voice : Lilting valleys accent\n"));
        // One character: no ensemble direction, but broadcast stays.
        assert!(!prompt.contains("ENSEMBLE DIRECTION"));
        assert!(prompt.contains("BROADCAST QUALITY"));
        assert!(prompt.contains("DURATION: Exactly 8 seconds\n"));
        assert!(prompt.contains("STYLE: Professional broadcast documentary style\n"));
        assert!(prompt.contains(
            "OUTPUT: High-quality video with synchronized Welsh-accented audio\n"
        ));
    }

    #[test]
    fn two_characters_emit_ensemble_cast_and_direction() {
        let mut session = single_character_session();
        session.toggle_character("B");

        let prompt = assemble(
            &session,
            &data(),
            &OverrideStore::default(),
            &PromptToggles::default(),
        )
        .unwrap();

        assert!(prompt.contains("ENSEMBLE CAST:\nA: D\nB: Second description\n"));
        assert!(!prompt.contains("SUBJECT:"));
        assert!(prompt.contains(ENSEMBLE_DIRECTION));
    }

    #[test]
    fn dialogue_block_quotes_each_line_in_order() {
        let data = data();
        let overrides = OverrideStore::default();
        let mut session = single_character_session();
        session
            .append_dialogue_line(&data, &overrides, "A", "First")
            .unwrap();
        session
            .append_dialogue_line(&data, &overrides, "A", "Second")
            .unwrap();

        let prompt = assemble(&session, &data, &overrides, &PromptToggles::default()).unwrap();
        assert!(prompt.contains("DIALOGUE SEQUENCE:\nA: \"First\"\nA: \"Second\"\n"));
    }

    #[test]
    fn camera_block_numbers_complete_shots_only() {
        let mut session = single_character_session();
        session
            .upsert_camera_shot_at(0, CameraShot::new("", "", "draft only"))
            .unwrap();
        session
            .upsert_camera_shot_at(1, CameraShot::new(SHOT_WIDE, MOVEMENT_PAN, "opening sweep"))
            .unwrap();
        session
            .upsert_camera_shot_at(2, CameraShot::new(SHOT_CLOSE_UP, MOVEMENT_STATIC, ""))
            .unwrap();

        let prompt = assemble(
            &session,
            &data(),
            &OverrideStore::default(),
            &PromptToggles::default(),
        )
        .unwrap();

        assert!(prompt.contains("CAMERA SEQUENCE:\nShot 1: wide pan - opening sweep\nShot 2: close-up static\n"));
        assert!(!prompt.contains(CAMERA_FALLBACK));
    }

    #[test]
    fn toggles_remove_their_sections() {
        let session = single_character_session();
        let toggles = PromptToggles {
            include_voice: false,
            include_ensemble_direction: false,
            include_broadcast_quality: false,
        };

        let prompt = assemble(&session, &data(), &OverrideStore::default(), &toggles).unwrap();
        assert!(!prompt.contains("voice :"));
        assert!(!prompt.contains("BROADCAST QUALITY"));
    }

    #[test]
    fn missing_character_selection_is_a_validation_error() {
        let mut session = Session::new();
        session.select_scene("S");

        let err = assemble(
            &session,
            &data(),
            &OverrideStore::default(),
            &PromptToggles::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn missing_scene_selection_is_a_validation_error() {
        let mut session = Session::new();
        session.toggle_character("A");

        assert!(matches!(
            assemble(
                &session,
                &data(),
                &OverrideStore::default(),
                &PromptToggles::default(),
            ),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn overrides_flow_into_the_prompt() {
        let data = data();
        let mut overrides = OverrideStore::default();
        overrides
            .apply_character_edit(
                &data,
                "A",
                &crate::character::CharacterEdit {
                    description: Some("Edited description".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let session = single_character_session();
        let prompt = assemble(&session, &data, &overrides, &PromptToggles::default()).unwrap();
        assert!(prompt.contains("SUBJECT: Edited description\n"));
    }

    #[test]
    fn assembly_is_deterministic() {
        let session = single_character_session();
        let data = data();
        let overrides = OverrideStore::default();
        let toggles = PromptToggles::default();

        let first = assemble(&session, &data, &overrides, &toggles).unwrap();
        let second = assemble(&session, &data, &overrides, &toggles).unwrap();
        assert_eq!(first, second);
    }
}
