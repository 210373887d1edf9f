use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::hooks::use_listing::use_listing;
use api::product::Product;
use dioxus::prelude::*;

/// Renders the displayed products, or an explicit empty state when a filter
/// matched nothing.
#[component]
pub fn ProductGrid(products: Vec<Product>) -> Element {
    if products.is_empty() {
        return rsx! {
            EmptyState {
                title: "No products found".to_string(),
                description: Some("There are no products in this category.".to_string()),
            }
        };
    }

    rsx! {
        Grid {
            // ids are not validated upstream and may repeat, so the position
            // keeps keys unique
            for (index, product) in products.into_iter().enumerate() {
                ProductCard {
                    key: "{index}-{product.id}",
                    product: product.clone(),
                }
            }
        }
    }
}

#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut listing = use_listing();
    let price = product.display_price();
    let clicked = product.clone();

    rsx! {
        Card {
            div {
                class: "card-image",
                img {
                    src: "{product.image}",
                    alt: "{product.title}",
                }
            }
            div {
                class: "card-body",
                h3 { class: "card-title", "{product.title}" }
                p { class: "card-price", "{price}" }
                Button {
                    wide: true,
                    on_click: move |_| listing.add_to_cart(&clicked),
                    "Add to Cart"
                }
            }
        }
    }
}
