//! Lazy per-character dialogue option sourcing.
//!
//! Each character may have a plain-text line list at
//! `dialogues/{slug}.txt` under the catalog base URL. The load is
//! lazy, idempotent per character, and failure-proof: when the
//! resource is missing or unreachable the character's own sample
//! dialogue fills the inventory instead, and nothing is surfaced to
//! the user.

use promptdeck_core::catalog::ReferenceData;
use promptdeck_core::error::CoreError;
use promptdeck_core::overrides::OverrideStore;
use promptdeck_core::session::Session;

use crate::client::CatalogClient;

/// Resource slug for a character name: lower-cased with all
/// whitespace stripped (`"Nan Wen"` → `"nanwen"`).
pub fn dialogue_resource_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Split a dialogue resource body into options: one per line, trimmed,
/// blank lines discarded.
pub fn parse_dialogue_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl CatalogClient {
    /// Ensure the dialogue option inventory for `key` is populated.
    ///
    /// Returns immediately when an inventory is already cached (a
    /// consumed-down list is never re-populated). Otherwise fetches
    /// the character's line resource; any transport or status failure
    /// falls back to a copy of the effective character's sample
    /// dialogue, logged but never reported. Only an unknown character
    /// key is an error.
    pub async fn load_dialogue_options(
        &self,
        session: &mut Session,
        data: &ReferenceData,
        overrides: &OverrideStore,
        key: &str,
    ) -> Result<(), CoreError> {
        if session.dialogue_options.is_cached(key) {
            return Ok(());
        }

        let character = overrides.effective_character(data, key)?;

        let url = format!(
            "{}/dialogues/{}.txt",
            self.base_url(),
            dialogue_resource_slug(key)
        );

        let lines = match self.fetch_text(&url).await {
            Ok(body) => {
                let lines = parse_dialogue_lines(&body);
                tracing::debug!(character = key, count = lines.len(), "Loaded dialogue resource {url}");
                lines
            }
            Err(error) => {
                tracing::warn!(
                    character = key,
                    %error,
                    "Dialogue resource unavailable, falling back to sample dialogue",
                );
                // The inventory owns its copy; consuming an option
                // must not reach the catalog entry.
                character.dialogue.clone()
            }
        };

        session.dialogue_options.cache(key, lines);
        Ok(())
    }
}
