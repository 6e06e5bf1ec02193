//! Camera shot descriptors, enums, and the fixed shot templates.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Shot type / movement enums
// ---------------------------------------------------------------------------

pub const SHOT_WIDE: &str = "wide";
pub const SHOT_MEDIUM: &str = "medium";
pub const SHOT_CLOSE_UP: &str = "close-up";
pub const SHOT_TWO_SHOT: &str = "two-shot";
pub const SHOT_GROUP_SHOT: &str = "group-shot";

pub const VALID_SHOT_TYPES: &[&str] = &[
    SHOT_WIDE,
    SHOT_MEDIUM,
    SHOT_CLOSE_UP,
    SHOT_TWO_SHOT,
    SHOT_GROUP_SHOT,
];

pub const MOVEMENT_STATIC: &str = "static";
pub const MOVEMENT_PAN: &str = "pan";
pub const MOVEMENT_TILT: &str = "tilt";
pub const MOVEMENT_ZOOM: &str = "zoom";

pub const VALID_CAMERA_MOVEMENTS: &[&str] =
    &[MOVEMENT_STATIC, MOVEMENT_PAN, MOVEMENT_TILT, MOVEMENT_ZOOM];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotType {
    Wide,
    Medium,
    CloseUp,
    TwoShot,
    GroupShot,
}

impl ShotType {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            SHOT_WIDE => Ok(Self::Wide),
            SHOT_MEDIUM => Ok(Self::Medium),
            SHOT_CLOSE_UP => Ok(Self::CloseUp),
            SHOT_TWO_SHOT => Ok(Self::TwoShot),
            SHOT_GROUP_SHOT => Ok(Self::GroupShot),
            _ => Err(CoreError::Validation(format!(
                "Invalid shot type '{s}'. Must be one of: {}",
                VALID_SHOT_TYPES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wide => SHOT_WIDE,
            Self::Medium => SHOT_MEDIUM,
            Self::CloseUp => SHOT_CLOSE_UP,
            Self::TwoShot => SHOT_TWO_SHOT,
            Self::GroupShot => SHOT_GROUP_SHOT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Static,
    Pan,
    Tilt,
    Zoom,
}

impl CameraMovement {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            MOVEMENT_STATIC => Ok(Self::Static),
            MOVEMENT_PAN => Ok(Self::Pan),
            MOVEMENT_TILT => Ok(Self::Tilt),
            MOVEMENT_ZOOM => Ok(Self::Zoom),
            _ => Err(CoreError::Validation(format!(
                "Invalid camera movement '{s}'. Must be one of: {}",
                VALID_CAMERA_MOVEMENTS.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => MOVEMENT_STATIC,
            Self::Pan => MOVEMENT_PAN,
            Self::Tilt => MOVEMENT_TILT,
            Self::Zoom => MOVEMENT_ZOOM,
        }
    }
}

// ---------------------------------------------------------------------------
// Camera shot
// ---------------------------------------------------------------------------

/// One shot descriptor in the composed camera sequence.
///
/// A shot starts life as a draft with empty fields and stays editable
/// in that state; it only counts toward the effective sequence once
/// both `shot_type` and `movement` are set. Wire names match the
/// project snapshot (`type`, `movement`, `description`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraShot {
    #[serde(rename = "type", default)]
    pub shot_type: String,
    #[serde(default)]
    pub movement: String,
    #[serde(default)]
    pub description: String,
}

impl CameraShot {
    pub fn new(
        shot_type: impl Into<String>,
        movement: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            shot_type: shot_type.into(),
            movement: movement.into(),
            description: description.into(),
        }
    }

    /// A complete shot has both a shot type and a movement.
    pub fn is_complete(&self) -> bool {
        !self.shot_type.is_empty() && !self.movement.is_empty()
    }

    /// Validate that any non-empty enum field holds a known value.
    /// Empty fields are fine: the shot is simply still a draft.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.shot_type.is_empty() {
            ShotType::parse(&self.shot_type)?;
        }
        if !self.movement.is_empty() {
            CameraMovement::parse(&self.movement)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Shot templates
// ---------------------------------------------------------------------------

pub const TEMPLATE_ENSEMBLE: &str = "ensemble";
pub const TEMPLATE_DIALOGUE: &str = "dialogue";
pub const TEMPLATE_INTERVIEW: &str = "interview";

pub const VALID_TEMPLATES: &[&str] = &[TEMPLATE_ENSEMBLE, TEMPLATE_DIALOGUE, TEMPLATE_INTERVIEW];

/// Resolve a named shot template to its fixed shot list.
pub fn shot_template(name: &str) -> Result<Vec<CameraShot>, CoreError> {
    match name {
        TEMPLATE_ENSEMBLE => Ok(vec![
            CameraShot::new(SHOT_WIDE, MOVEMENT_STATIC, "Establishing shot"),
            CameraShot::new(SHOT_MEDIUM, MOVEMENT_PAN, "Character introductions"),
            CameraShot::new(SHOT_CLOSE_UP, MOVEMENT_STATIC, "Key character focus"),
        ]),
        TEMPLATE_DIALOGUE => Ok(vec![
            CameraShot::new(SHOT_MEDIUM, MOVEMENT_STATIC, "Speaker close-up"),
            CameraShot::new(SHOT_CLOSE_UP, MOVEMENT_STATIC, "Reaction shot"),
        ]),
        TEMPLATE_INTERVIEW => Ok(vec![
            CameraShot::new(SHOT_MEDIUM, MOVEMENT_ZOOM, "Interview setup"),
            CameraShot::new(SHOT_CLOSE_UP, MOVEMENT_STATIC, "Subject focus"),
        ]),
        _ => Err(CoreError::Validation(format!(
            "Unknown camera template '{name}'. Must be one of: {}",
            VALID_TEMPLATES.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_shot_is_not_complete() {
        assert!(!CameraShot::default().is_complete());
        assert!(!CameraShot::new(SHOT_WIDE, "", "").is_complete());
        assert!(!CameraShot::new("", MOVEMENT_PAN, "").is_complete());
    }

    #[test]
    fn complete_shot_needs_no_description() {
        assert!(CameraShot::new(SHOT_WIDE, MOVEMENT_STATIC, "").is_complete());
    }

    #[test]
    fn draft_fields_pass_validation() {
        assert!(CameraShot::default().validate().is_ok());
    }

    #[test]
    fn unknown_shot_type_rejected() {
        let err = CameraShot::new("aerial", MOVEMENT_PAN, "").validate().unwrap_err();
        assert!(err.to_string().contains("Invalid shot type"));
    }

    #[test]
    fn unknown_movement_rejected() {
        let err = CameraShot::new(SHOT_WIDE, "dolly", "").validate().unwrap_err();
        assert!(err.to_string().contains("Invalid camera movement"));
    }

    #[test]
    fn enum_round_trip() {
        for value in VALID_SHOT_TYPES {
            assert_eq!(ShotType::parse(value).unwrap().as_str(), *value);
        }
        for value in VALID_CAMERA_MOVEMENTS {
            assert_eq!(CameraMovement::parse(value).unwrap().as_str(), *value);
        }
    }

    #[test]
    fn templates_resolve_to_complete_shots() {
        for name in VALID_TEMPLATES {
            let shots = shot_template(name).unwrap();
            assert!(!shots.is_empty());
            assert!(shots.iter().all(CameraShot::is_complete));
        }
    }

    #[test]
    fn unknown_template_rejected() {
        assert!(shot_template("montage").is_err());
    }

    #[test]
    fn shot_serializes_with_wire_field_names() {
        let shot = CameraShot::new(SHOT_WIDE, MOVEMENT_PAN, "sweep");
        let value = serde_json::to_value(&shot).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "wide", "movement": "pan", "description": "sweep"})
        );
    }
}
