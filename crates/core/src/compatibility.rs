//! Character/scene compatibility check.

use serde::Serialize;

use crate::catalog::ReferenceData;
use crate::error::CoreError;
use crate::overrides::OverrideStore;
use crate::session::Session;

/// One verdict per selected character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityVerdict {
    pub character: String,
    pub scene: String,
    pub compatible: bool,
}

/// Outcome of a compatibility check.
///
/// `NothingToCheck` is deliberate: with no scene or no characters
/// selected there is nothing to report, and the view shows its
/// standing hint instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompatibilityReport {
    NothingToCheck,
    Checked { verdicts: Vec<CompatibilityVerdict> },
}

/// Check every selected character against the selected scene.
///
/// A character is compatible when the selected scene key appears in
/// the effective character's scene list.
pub fn check_compatibility(
    session: &Session,
    data: &ReferenceData,
    overrides: &OverrideStore,
) -> Result<CompatibilityReport, CoreError> {
    let scene = match &session.selected_scene {
        Some(scene) if !session.selected_characters.is_empty() => scene,
        _ => return Ok(CompatibilityReport::NothingToCheck),
    };

    let mut verdicts = Vec::with_capacity(session.selected_characters.len());
    for key in &session.selected_characters {
        let character = overrides.effective_character(data, key)?;
        verdicts.push(CompatibilityVerdict {
            character: key.clone(),
            scene: scene.clone(),
            compatible: character.scenes.contains(scene),
        });
    }

    Ok(CompatibilityReport::Checked { verdicts })
}
