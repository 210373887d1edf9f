use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_listing::use_listing;
use dioxus::prelude::*;

const CART_ICON_PATH: &str = "M16 11V7a4 4 0 00-8 0v4M5 9h14l1 12H4L5 9z";

/// Store name, mock sign-in controls and the cart button.
#[component]
pub fn StoreHeader() -> Element {
    let mut listing = use_listing();
    let state = listing.state();
    let logged_in = state.read().is_logged_in();
    let cart_count = state.read().cart_count();

    rsx! {
        header {
            class: "store-header",
            div {
                class: "store-bar",
                h1 { class: "store-name", "FASHIONSTORE" }
                div {
                    class: "store-actions",
                    if logged_in {
                        Button {
                            button_type: ButtonType::Link,
                            on_click: move |_| listing.toggle_login(),
                            "Sign Out"
                        }
                    } else {
                        Button {
                            button_type: ButtonType::Link,
                            on_click: move |_| listing.toggle_login(),
                            "Sign In"
                        }
                        // no sign-up flow exists
                        Button {
                            button_type: ButtonType::Link,
                            "Sign Up"
                        }
                    }
                    CartButton { count: cart_count }
                }
            }
        }
    }
}

#[component]
fn CartButton(count: usize) -> Element {
    rsx! {
        button {
            class: "cart-button",
            "aria-label": "Cart",
            svg {
                "xmlns": "http://www.w3.org/2000/svg",
                class: "cart-icon",
                "fill": "none",
                "viewBox": "0 0 24 24",
                "stroke": "currentColor",
                path {
                    "stroke-linecap": "round",
                    "stroke-linejoin": "round",
                    "stroke-width": "2",
                    "d": CART_ICON_PATH,
                }
            }
            span { class: "cart-badge", "{count}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_listing::use_listing_state_provider;
    use crate::listing_state::ListingState;
    use api::catalog::Catalog;

    #[component]
    fn Harness(state: ListingState) -> Element {
        use_listing_state_provider(move || state);
        rsx! { StoreHeader {} }
    }

    fn render(state: ListingState) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { state });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn logged_out_offers_sign_in_and_sign_up() {
        let html = render(ListingState::new(Catalog::default()));
        assert!(html.contains("Sign In"));
        assert!(html.contains("Sign Up"));
        assert!(!html.contains("Sign Out"));
    }

    #[test]
    fn logged_in_offers_only_sign_out() {
        let html = render(ListingState::new(Catalog::default()).toggle_login());
        assert!(html.contains("Sign Out"));
        assert!(!html.contains("Sign In"));
        assert!(!html.contains("Sign Up"));
        assert!(html.contains(r#"<span class="cart-badge">0</span>"#));
    }
}
