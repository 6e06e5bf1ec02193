//! Character gallery projection: filtering and card briefs.

use crate::catalog::ReferenceData;
use crate::overrides::OverrideStore;

/// Maximum brief length before the description is cut.
const BRIEF_MAX_CHARS: usize = 80;

/// Keys of the characters matching the gallery filters, in catalog
/// document order.
///
/// `search` is a case-insensitive substring match on the display name;
/// `category` is an equality match on the effective category. An empty
/// string for either means no constraint.
pub fn filter_characters(
    data: &ReferenceData,
    overrides: &OverrideStore,
    search: &str,
    category: &str,
) -> Vec<String> {
    let needle = search.to_lowercase();

    data.characters
        .iter()
        .filter(|(name, character)| {
            let effective = overrides.characters.get(name.as_str()).unwrap_or(character);

            let matches_search = needle.is_empty() || name.to_lowercase().contains(&needle);
            let matches_category = category.is_empty() || effective.category == category;

            matches_search && matches_category
        })
        .map(|(name, _)| name.clone())
        .collect()
}

/// Short description for a gallery card: the first 80 characters of
/// the description, with an ellipsis when cut.
pub fn character_brief(description: &str) -> String {
    if description.chars().count() > BRIEF_MAX_CHARS {
        let cut: String = description.chars().take(BRIEF_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        description.to_string()
    }
}
