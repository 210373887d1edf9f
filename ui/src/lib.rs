// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod hooks;
pub mod listing_state;
mod screens;

use components::pico::Container;
use screens::listing::ListingScreen;

/// Page title shown in the browser tab.
pub const PAGE_TITLE: &str = "Fashion Store | Products";
/// Content of the description meta tag.
pub const PAGE_DESCRIPTION: &str = "Browse our collection";

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let store_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    body {
        margin: 0;
        font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
        color: #111827;
    }

    .page { min-height: 100vh; background-color: #f9fafb; }

    .container { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }

    /* --- HEADER --- */
    .store-header { background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
    .store-bar {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .store-name { font-size: 1.25rem; font-weight: 700; margin: 0; }
    .store-actions { display: flex; align-items: center; gap: 1rem; }

    .cart-button { position: relative; background: none; border: none; cursor: pointer; }
    .cart-icon { width: 1.5rem; height: 1.5rem; }
    .cart-badge {
        position: absolute;
        top: -0.25rem; right: -0.25rem;
        width: 1rem; height: 1rem;
        display: flex; align-items: center; justify-content: center;
        border-radius: 9999px;
        background: #ef4444; color: #fff;
        font-size: 0.75rem;
    }

    /* --- BUTTONS --- */
    .btn {
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        font-weight: 500;
        border-radius: 0.375rem;
        cursor: pointer;
    }
    .btn-primary { background: #000; color: #fff; border: 1px solid #000; }
    .btn-primary:hover { background: #1f2937; }
    .btn-secondary { background: #fff; color: #1f2937; border: 1px solid #d1d5db; }
    .btn-secondary:hover { background: #f9fafb; }
    .btn-wide { width: 100%; }
    .btn-link {
        background: none; border: none; cursor: pointer;
        font-size: 0.875rem; font-weight: 500; color: #374151;
    }
    .btn-link:hover { color: #111827; }

    /* --- FILTERS --- */
    .filter-row {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        margin-bottom: 2rem;
    }
    .filter-buttons { display: flex; gap: 0.5rem; }
    .sort-select { padding: 0.5rem 2.5rem 0.5rem 0.75rem; border-radius: 0.375rem; border: 1px solid #d1d5db; }

    /* --- GRID --- */
    .grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
    @media (min-width: 640px) { .grid { grid-template-columns: repeat(2, 1fr); } }
    @media (min-width: 1024px) { .grid { grid-template-columns: repeat(3, 1fr); } }
    @media (min-width: 1280px) { .grid { grid-template-columns: repeat(4, 1fr); } }

    .card {
        background: #fff;
        border-radius: 0.5rem;
        overflow: hidden;
        box-shadow: 0 4px 6px rgba(0,0,0,0.1);
        transition: box-shadow 300ms;
    }
    .card:hover { box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
    .card-image { height: 16rem; padding: 1rem; display: flex; align-items: center; justify-content: center; }
    .card-image img { max-height: 100%; max-width: 100%; object-fit: contain; }
    .card-body { padding: 1rem; border-top: 1px solid #e5e7eb; }
    .card-title {
        font-size: 0.875rem; font-weight: 500; margin: 0 0 0.25rem 0;
        display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden;
    }
    .card-price { font-size: 0.875rem; font-weight: 500; margin: 0 0 0.5rem 0; }

    .empty-state {
        padding: 2rem;
        text-align: center;
        color: #6b7280;
        border: 2px dashed #e5e7eb;
        border-radius: 0.5rem;
    }

    /* --- FOOTER --- */
    .store-footer { background: #fff; border-top: 1px solid #e5e7eb; margin-top: 3rem; padding: 1.5rem 1rem; }
    .store-footer p { text-align: center; font-size: 0.875rem; color: #6b7280; margin: 0; }
"#;

    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta {
            name: "description",
            content: "{PAGE_DESCRIPTION}",
        }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{store_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let catalog_future = use_server_future(move || async move { api::catalog().await })?;

    let body = match &*catalog_future.read() {
        Some(Ok(catalog)) => {
            rsx! {
                ListingScreen {
                    catalog: catalog.clone(),
                }
            }
        }
        // No page is rendered without a catalog; the server answers with the status.
        Some(Err(e)) => {
            dioxus_logger::tracing::error!("catalog unavailable: {e}");
            return Err(catalog_unavailable(e).into());
        }
        None => rsx! {
            Container {
                p {
                    "Loading..."
                }
            }
        },
    };
    body
}

/// The error a page render fails with when the upstream catalog could not be loaded.
fn catalog_unavailable(cause: impl std::fmt::Display) -> HttpError {
    HttpError::new(
        StatusCode::BAD_GATEWAY,
        format!("failed to load products: {cause}"),
    )
}
