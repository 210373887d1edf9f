use crate::listing_state::ListingState;
use api::catalog::Catalog;
use api::catalog::CategoryFilter;
use api::product::Product;
use dioxus::prelude::*;

/// Reactive handle to the listing page's state, shared through context.
///
/// Each action swaps in a new `ListingState`; components reading the signal
/// re-render afterwards.
#[derive(Clone, Copy)]
pub struct ListingHandle {
    state: Signal<ListingState>,
}

impl ListingHandle {
    /// Replaces the displayed products with the subset selected by `filter`.
    pub fn filter(&mut self, filter: CategoryFilter) {
        let next = self.state.peek().filter(&filter);
        self.state.set(next);
    }

    pub fn toggle_login(&mut self) {
        let next = self.state.peek().toggle_login();
        self.state.set(next);
    }

    /// Forwards to the no-op cart action. The signal is only written if the
    /// state actually changed, which it never does today.
    pub fn add_to_cart(&mut self, product: &Product) {
        let next = self.state.peek().add_to_cart(product);
        if *self.state.peek() != next {
            self.state.set(next);
        }
    }

    /// Returns the signal. Call .read() on it inside a component to subscribe.
    pub fn state(&self) -> Signal<ListingState> {
        self.state
    }
}

/// Creates the listing state for `catalog` and provides it to all children.
pub fn use_listing_provider(catalog: Catalog) -> ListingHandle {
    use_listing_state_provider(move || ListingState::new(catalog))
}

pub fn use_listing_state_provider(init: impl FnOnce() -> ListingState) -> ListingHandle {
    let state = use_signal(init);
    use_context_provider(|| ListingHandle { state })
}

pub fn use_listing() -> ListingHandle {
    use_context::<ListingHandle>()
}
