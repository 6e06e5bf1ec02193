//! Catalog endpoint configuration.

/// Where the catalog documents live.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL serving `characters.json`, `scenes.json` and the
    /// `dialogues/` resources, without a trailing slash.
    pub base_url: String,
}

impl CatalogConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                 |
    /// |--------------------|-------------------------|
    /// | `CATALOG_BASE_URL` | `http://localhost:8080` |
    pub fn from_env() -> Self {
        let base_url = std::env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".into());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
