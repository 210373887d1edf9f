//! This crate contains the storefront's shared data types and fullstack server functions.

pub mod catalog;
#[cfg(not(target_arch = "wasm32"))]
pub mod catalog_source;
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod error;
pub mod product;

use catalog::Catalog;
use dioxus::prelude::*;

pub type ApiError = anyhow::Error;

/// Retrieves the product catalog for the page being rendered.
///
/// Runs on the server during the initial render. Failures are passed through
/// to the page unchanged; there is no fallback catalog.
#[get("/api/catalog")]
pub async fn catalog() -> Result<Catalog, ApiError> {
    use catalog_source::{CatalogSource, HttpCatalog};

    let config = config::StoreConfig::from_env();
    let source = HttpCatalog::new(config.catalog_url());

    match source.fetch_catalog().await {
        Ok(catalog) => {
            dioxus_logger::tracing::info!(
                "loaded {} products from {}",
                catalog.len(),
                source.url()
            );
            Ok(catalog)
        }
        Err(e) => {
            dioxus_logger::tracing::error!("catalog fetch from {} failed: {}", source.url(), e);
            Err(e.into())
        }
    }
}
