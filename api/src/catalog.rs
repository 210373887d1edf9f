//! The immutable product catalog and the category filter applied to it.

use crate::product::Product;
use serde::Deserialize;
use serde::Serialize;
use std::ops::Deref;
use std::sync::Arc;

/// Category token of the men's clothing filter control.
pub const MENS_CLOTHING: &str = "men's clothing";
/// Category token of the women's clothing filter control.
pub const WOMENS_CLOTHING: &str = "women's clothing";
/// Token selecting the whole catalog.
pub const ALL_TOKEN: &str = "all";

/// The filter controls shown on the listing page as `(label, token)` pairs.
pub const FILTER_CONTROLS: [(&str, &str); 3] = [
    ("All Products", ALL_TOKEN),
    ("Men's", MENS_CLOTHING),
    ("Women's", WOMENS_CLOTHING),
];

/// An ordered, read-only list of products fetched for one page render.
///
/// The products live behind an `Arc`, so cloning a catalog into reactive
/// state does not copy the items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Arc<[Product]>);

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self(products.into())
    }

    /// Returns the ordered subsequence of products selected by `filter`.
    ///
    /// `All` yields every product. A category yields the products whose
    /// category is exactly equal to the token; an unknown token yields nothing.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<Product> {
        match filter {
            CategoryFilter::All => self.0.to_vec(),
            CategoryFilter::Category(token) => self
                .0
                .iter()
                .filter(|product| product.category == *token)
                .cloned()
                .collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for Catalog {
    type Target = [Product];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

/// Selects which part of the catalog is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on `Product::category`.
    Category(String),
}

impl CategoryFilter {
    /// Parses a category token. Only the literal `"all"` selects everything;
    /// any other text is kept verbatim as a category.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            Self::All
        } else {
            Self::Category(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_TOKEN,
            Self::Category(token) => token,
        }
    }
}
