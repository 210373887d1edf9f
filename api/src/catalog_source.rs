//! Defines the trait and HTTP implementation for the upstream product catalog.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::product::Product;
use dioxus_logger::tracing::debug;

/// A service that can provide the store's product catalog.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Fetches the full catalog. Called once per page render.
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogError>;
}

/// Reads the catalog from a JSON endpoint with a single `GET`.
///
/// There is no retry, timeout or caching: whatever the endpoint answers on
/// the first try is the result.
pub struct HttpCatalog {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        debug!("fetching catalog from {}", self.url);

        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        // Decode separately so a bad payload is reported as such rather than
        // as a transport error.
        let body = resp.bytes().await?;
        let products: Vec<Product> = serde_json::from_slice(&body)?;

        Ok(Catalog::new(products))
    }
}
