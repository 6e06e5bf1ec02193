//! Error type for the session core.

/// Errors surfaced by the session core.
///
/// `Validation` and `Parse` are user-visible, transient conditions: the
/// caller shows the message and leaves state untouched. `NotFound`
/// indicates a key that resolves to neither a catalog entry nor an
/// override.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Parse failed: {0}")]
    Parse(String),
}
