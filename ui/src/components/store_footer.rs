use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn StoreFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "store-footer",
            p { "© {year} Fashion Store. All rights reserved." }
        }
    }
}
