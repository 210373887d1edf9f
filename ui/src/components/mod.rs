//! Shared building blocks of the listing page.
pub mod empty_state;
pub mod filter_bar;
pub mod pico;
pub mod product_card;
pub mod store_footer;
pub mod store_header;
