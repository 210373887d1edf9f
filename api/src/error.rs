//! Errors raised while retrieving the product catalog.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog endpoint {url} responded with status {status}")]
    Status { status: u16, url: String },

    #[error("catalog response is not a product list: {0}")]
    Decode(#[from] serde_json::Error),
}
