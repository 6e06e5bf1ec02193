//! HTTP client for the catalog documents.
//!
//! [`CatalogClient`] wraps a [`reqwest::Client`] pointed at the base
//! URL serving the two catalog documents. Startup calls
//! [`load_reference_data`](CatalogClient::load_reference_data) once;
//! both documents are fetched in parallel and both must succeed, so a
//! partial failure leaves the caller with no catalogs at all rather
//! than half a data set.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use promptdeck_core::catalog::ReferenceData;
use promptdeck_core::character::Character;
use promptdeck_core::scene::Scene;

use crate::config::CatalogConfig;

/// Errors from the catalog retrieval layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Catalog fetch failed with status {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body was not a valid catalog document.
    #[error("Invalid catalog document from {url}: {message}")]
    Decode { url: String, message: String },
}

/// HTTP client for one catalog endpoint.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling with other consumers).
    pub fn with_client(client: reqwest::Client, config: CatalogConfig) -> Self {
        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// Base HTTP URL (e.g. `http://host:8080`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch both catalogs concurrently.
    ///
    /// Either failure fails the whole load: the reference data is only
    /// ever fully present or fully absent.
    pub async fn load_reference_data(&self) -> Result<ReferenceData, CatalogError> {
        let (characters, scenes) = tokio::try_join!(
            self.fetch_catalog::<Character>("characters.json"),
            self.fetch_catalog::<Scene>("scenes.json"),
        )?;

        tracing::info!(
            characters = characters.len(),
            scenes = scenes.len(),
            "Loaded reference catalogs from {}",
            self.base_url,
        );

        Ok(ReferenceData::new(characters, scenes))
    }

    /// Fetch one catalog document into an order-preserving map.
    async fn fetch_catalog<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<IndexMap<String, T>, CatalogError> {
        let url = format!("{}/{path}", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<IndexMap<String, T>>()
            .await
            .map_err(|e| CatalogError::Decode {
                url,
                message: e.to_string(),
            })
    }

    /// Fetch a plain-text resource, returning the body on a 2xx status.
    pub(crate) async fn fetch_text(&self, url: &str) -> Result<String, CatalogError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
