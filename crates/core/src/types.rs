//! Shared type aliases.

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Characters are keyed by their unique display name.
pub type CharacterKey = String;

/// Scenes are keyed by their unique display name.
pub type SceneKey = String;
