//! Dialogue lines and the per-character option inventory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::CharacterKey;

/// One speaker/text pair in the composed dialogue sequence.
///
/// The speaker key is stored as-is; nothing ties it to the current
/// selection, so a line keeps its speaker even after that character is
/// deselected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: CharacterKey,
    pub text: String,
}

impl DialogueLine {
    pub fn new(speaker: impl Into<CharacterKey>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// Lazily-populated, per-character dialogue option lists.
///
/// Each list is a one-shot inventory: consuming an option removes it
/// and it never comes back, because a cached key is never re-populated.
#[derive(Debug, Clone, Default)]
pub struct DialogueInventory {
    options: HashMap<CharacterKey, Vec<String>>,
}

impl DialogueInventory {
    /// Whether an inventory (possibly empty by now) exists for `key`.
    pub fn is_cached(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Store the option list for `key`. First write wins: a later call
    /// for an already-cached key is ignored, which is what makes the
    /// load path idempotent.
    pub fn cache(&mut self, key: &str, lines: Vec<String>) {
        self.options.entry(key.to_string()).or_insert(lines);
    }

    /// The remaining options for `key`, or `None` when nothing has been
    /// loaded yet.
    pub fn options(&self, key: &str) -> Option<&[String]> {
        self.options.get(key).map(Vec::as_slice)
    }

    /// Destructive read: remove and return the option at `index`.
    ///
    /// The same index position can be consumed again only because the
    /// entries after it shift down; the returned text itself is gone
    /// from the inventory for good.
    pub fn consume(&mut self, key: &str, index: usize) -> Result<String, CoreError> {
        let lines = self.options.get_mut(key).ok_or_else(|| CoreError::NotFound {
            entity: "dialogue options",
            key: key.to_string(),
        })?;

        if index >= lines.len() {
            return Err(CoreError::Validation(format!(
                "Dialogue option index {index} out of range ({} available)",
                lines.len()
            )));
        }

        Ok(lines.remove(index))
    }

    /// Drop every cached inventory (used on wholesale state import).
    pub fn clear(&mut self) {
        self.options.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_is_first_write_wins() {
        let mut inventory = DialogueInventory::default();
        inventory.cache("Nan", vec!["one".to_string()]);
        inventory.cache("Nan", vec!["two".to_string(), "three".to_string()]);

        assert_eq!(inventory.options("Nan").unwrap(), ["one"]);
    }

    #[test]
    fn consume_removes_exactly_one_entry() {
        let mut inventory = DialogueInventory::default();
        inventory.cache(
            "Nan",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        );

        let taken = inventory.consume("Nan", 1).unwrap();
        assert_eq!(taken, "b");
        assert_eq!(inventory.options("Nan").unwrap(), ["a", "c"]);
    }

    #[test]
    fn consumed_option_never_returns() {
        let mut inventory = DialogueInventory::default();
        inventory.cache("Nan", vec!["only".to_string()]);

        inventory.consume("Nan", 0).unwrap();
        // Still cached (so no re-population happens), just empty.
        assert!(inventory.is_cached("Nan"));
        assert!(inventory.options("Nan").unwrap().is_empty());
        assert!(inventory.consume("Nan", 0).is_err());
    }

    #[test]
    fn consume_before_load_is_not_found() {
        let mut inventory = DialogueInventory::default();
        let err = inventory.consume("Nan", 0).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn out_of_range_index_rejected() {
        let mut inventory = DialogueInventory::default();
        inventory.cache("Nan", vec!["a".to_string()]);
        let err = inventory.consume("Nan", 5).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
