//=============================================================================
// File: src/screens/listing.rs
//=============================================================================
use crate::components::filter_bar::FilterBar;
use crate::components::pico::Container;
use crate::components::product_card::ProductGrid;
use crate::components::store_footer::StoreFooter;
use crate::components::store_header::StoreHeader;
use crate::hooks::use_listing::{use_listing, use_listing_provider};
use api::catalog::Catalog;
use dioxus::prelude::*;

/// The product listing page for an already fetched catalog.
#[component]
pub fn ListingScreen(catalog: Catalog) -> Element {
    use_listing_provider(catalog);

    rsx! {
        ListingPage {}
    }
}

/// Page layout over the listing state provided by an ancestor.
#[component]
fn ListingPage() -> Element {
    let listing = use_listing();
    let products = listing.state().read().displayed().to_vec();

    rsx! {
        div {
            class: "page",
            StoreHeader {}
            Container {
                FilterBar {}
                ProductGrid { products }
            }
            StoreFooter {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::catalog::{MENS_CLOTHING, WOMENS_CLOTHING};
    use api::product::Product;

    fn render(catalog: Catalog) -> String {
        let mut dom = VirtualDom::new_with_props(ListingScreen, ListingScreenProps { catalog });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_every_product_logged_out() {
        let html = render(Catalog::new(vec![
            Product::new(1, "Shirt", 20.0, MENS_CLOTHING, "a.png"),
            Product::new(2, "Dress", 40.0, WOMENS_CLOTHING, "b.png"),
        ]));

        assert!(html.contains("FASHIONSTORE"));
        assert!(html.contains("Sign In"));
        assert!(html.contains("Sign Up"));
        assert!(!html.contains("Sign Out"));
        assert!(html.contains("Shirt"));
        assert!(html.contains("$20"));
        assert!(html.contains("Dress"));
        assert!(html.contains("$40"));
        assert!(html.contains("a.png"));
        assert_eq!(html.matches("Add to Cart").count(), 2);
        assert!(html.contains("All Products"));
        assert!(html.contains("Price: Low to High"));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn products_keep_catalog_order() {
        let html = render(Catalog::new(vec![
            Product::new(1, "Zebra Tee", 10.0, MENS_CLOTHING, "z.png"),
            Product::new(2, "Alpha Coat", 90.0, WOMENS_CLOTHING, "a.png"),
        ]));
        let zebra = html.find("Zebra Tee").unwrap();
        let alpha = html.find("Alpha Coat").unwrap();
        assert!(zebra < alpha);
    }

    #[test]
    fn empty_catalog_shows_empty_state() {
        let html = render(Catalog::default());
        assert!(html.contains("No products found"));
        assert!(!html.contains("Add to Cart"));
    }

    #[test]
    fn cart_badge_starts_at_zero() {
        let html = render(Catalog::default());
        assert!(html.contains(r#"<span class="cart-badge">0</span>"#));
    }
}

#[cfg(test)]
mod interaction_tests {
    use super::*;
    use crate::hooks::use_listing::ListingHandle;
    use api::catalog::{CategoryFilter, MENS_CLOTHING, WOMENS_CLOTHING};
    use api::product::Product;
    use dioxus::core::NoOpMutations;
    use std::cell::Cell;

    thread_local! {
        static HANDLE: Cell<Option<ListingHandle>> = const { Cell::new(None) };
    }

    /// Same page as `ListingScreen`, but hands its handle out to the test.
    #[component]
    fn Harness(catalog: Catalog) -> Element {
        let handle = use_listing_provider(catalog);
        HANDLE.with(|h| h.set(Some(handle)));
        rsx! {
            ListingPage {}
        }
    }

    fn mount(catalog: Catalog) -> (VirtualDom, String) {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { catalog });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        (dom, html)
    }

    /// Runs `action` against the live handle, diffs, and renders again.
    fn act(dom: &mut VirtualDom, action: impl FnOnce(&mut ListingHandle)) -> String {
        dom.in_runtime(|| {
            let mut handle = HANDLE.with(|h| h.get()).expect("harness was rendered");
            action(&mut handle);
        });
        dom.render_immediate(&mut NoOpMutations);
        dioxus_ssr::render(dom)
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "Shirt", 20.0, MENS_CLOTHING, "a.png"),
            Product::new(2, "Dress", 40.0, WOMENS_CLOTHING, "b.png"),
            Product::new(3, "Hoodie", 35.0, MENS_CLOTHING, "c.png"),
        ])
    }

    #[test]
    fn category_then_all_restores_full_grid() {
        let (mut dom, html) = mount(catalog());
        assert_eq!(html.matches("Add to Cart").count(), 3);

        let html = act(&mut dom, |h| {
            h.filter(CategoryFilter::Category(MENS_CLOTHING.to_string()))
        });
        assert!(html.contains("Shirt"));
        assert!(html.contains("Hoodie"));
        assert!(!html.contains("Dress"));
        assert!(html.contains(r#"class="btn btn-secondary">All Products<"#));

        let html = act(&mut dom, |h| h.filter(CategoryFilter::All));
        assert_eq!(html.matches("Add to Cart").count(), 3);
        let shirt = html.find("Shirt").unwrap();
        let dress = html.find("Dress").unwrap();
        let hoodie = html.find("Hoodie").unwrap();
        assert!(shirt < dress && dress < hoodie);
    }

    #[test]
    fn unknown_category_shows_empty_state_after_render() {
        let (mut dom, _) = mount(catalog());

        let html = act(&mut dom, |h| {
            h.filter(CategoryFilter::Category("electronics".to_string()))
        });
        assert!(html.contains("No products found"));
        assert!(!html.contains("Add to Cart"));
    }

    #[test]
    fn toggling_twice_restores_sign_in() {
        let (mut dom, _) = mount(catalog());

        let html = act(&mut dom, |h| h.toggle_login());
        assert!(html.contains("Sign Out"));
        assert!(!html.contains("Sign In"));
        assert!(!html.contains("Sign Up"));

        let html = act(&mut dom, |h| h.toggle_login());
        assert!(html.contains("Sign In"));
        assert!(html.contains("Sign Up"));
        assert!(!html.contains("Sign Out"));
    }

    #[test]
    fn add_to_cart_leaves_page_unchanged() {
        let (mut dom, before) = mount(catalog());
        let shirt = catalog()[0].clone();

        let after = act(&mut dom, |h| h.add_to_cart(&shirt));
        assert_eq!(before, after);
        assert!(after.contains(r#"<span class="cart-badge">0</span>"#));
    }

    #[test]
    fn records_without_ids_survive_filtering() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"title": "A", "category": "men's clothing"},
                {"title": "B", "category": "women's clothing"},
                {"title": "C", "category": "men's clothing"}
            ]"#,
        )
        .unwrap();
        let (mut dom, html) = mount(Catalog::new(products));
        assert_eq!(html.matches("Add to Cart").count(), 3);

        let html = act(&mut dom, |h| {
            h.filter(CategoryFilter::Category(MENS_CLOTHING.to_string()))
        });
        assert_eq!(html.matches("Add to Cart").count(), 2);

        let html = act(&mut dom, |h| h.filter(CategoryFilter::All));
        assert_eq!(html.matches("Add to Cart").count(), 3);
    }
}
