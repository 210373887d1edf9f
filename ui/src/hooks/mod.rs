pub mod use_listing;
