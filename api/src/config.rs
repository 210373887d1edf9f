//! Store configuration resolved on the server.

use std::env;

/// Catalog endpoint used when `CATALOG_URL` is unset or blank.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StoreConfig {
    catalog_url: String,
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables, falling back to the
    /// in-code defaults.
    ///
    /// # Environment Variables
    /// - `CATALOG_URL`: endpoint returning the product list as a JSON array.
    pub fn from_env() -> Self {
        Self::resolve(env::var("CATALOG_URL").ok())
    }

    fn resolve(catalog_url: Option<String>) -> Self {
        let catalog_url = catalog_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        Self { catalog_url }
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }
}
