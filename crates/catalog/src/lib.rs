//! Catalog retrieval for the prompt builder.
//!
//! Loads the character and scene catalogs that seed
//! [`ReferenceData`](promptdeck_core::catalog::ReferenceData), and the
//! optional per-character dialogue line resources, over plain HTTP.

pub mod client;
pub mod config;
pub mod dialogue_source;

pub use client::{CatalogClient, CatalogError};
pub use config::CatalogConfig;
