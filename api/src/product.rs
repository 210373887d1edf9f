//! Defines a single catalog item as delivered by the upstream store API.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Identifier of a catalog entry.
///
/// The upstream API uses integers, but other stores hand out string ids, so
/// both shapes are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl Default for ProductId {
    fn default() -> Self {
        Self::Number(0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One catalog item.
///
/// Records are not validated. A missing field decodes to its empty default and
/// is rendered as such.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    /// Opaque category text, matched exactly by the category filter.
    pub category: String,
    /// URL of the product image.
    pub image: String,
}

impl Product {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::Number(id),
            title: title.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }

    /// Price as shown on a product card, e.g. `$22.3` or `$20`.
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}
