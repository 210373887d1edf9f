//! The listing page's view model: the fetched catalog, the subset on display
//! and the mock login flag.

use api::catalog::Catalog;
use api::catalog::CategoryFilter;
use api::product::Product;
use dioxus_logger::tracing::debug;

/// Immutable view model of the listing page.
///
/// Every transition returns a new state; the catalog inside is shared and
/// never changes for the lifetime of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    catalog: Catalog,
    displayed: Vec<Product>,
    active_filter: CategoryFilter,
    logged_in: bool,
}

impl ListingState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            displayed: catalog.filter(&CategoryFilter::All),
            catalog,
            active_filter: CategoryFilter::All,
            logged_in: false,
        }
    }

    pub fn displayed(&self) -> &[Product] {
        &self.displayed
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.active_filter
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Items in the cart. There is no cart, so always zero.
    pub fn cart_count(&self) -> usize {
        0
    }

    /// Recomputes the displayed subset from the full catalog.
    pub fn filter(&self, filter: &CategoryFilter) -> Self {
        Self {
            catalog: self.catalog.clone(),
            displayed: self.catalog.filter(filter),
            active_filter: filter.clone(),
            logged_in: self.logged_in,
        }
    }

    pub fn toggle_login(&self) -> Self {
        Self {
            logged_in: !self.logged_in,
            ..self.clone()
        }
    }

    /// The "Add to Cart" button is not connected to anything.
    pub fn add_to_cart(&self, product: &Product) -> Self {
        debug!("add to cart ignored for product {}", product.id);
        self.clone()
    }
}
