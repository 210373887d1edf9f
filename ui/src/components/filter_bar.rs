use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_listing::use_listing;
use api::catalog::CategoryFilter;
use api::catalog::FILTER_CONTROLS;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// Entries of the sort selector. Selecting one has no effect on the grid.
#[derive(Clone, Copy, PartialEq, Debug, Default, strum::EnumIter, strum::IntoStaticStr)]
pub enum SortOption {
    #[default]
    #[strum(serialize = "Sort by: Featured")]
    Featured,
    #[strum(serialize = "Price: Low to High")]
    PriceLowToHigh,
    #[strum(serialize = "Price: High to Low")]
    PriceHighToLow,
}

impl SortOption {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// Category buttons on the left, sort selector on the right.
#[component]
pub fn FilterBar() -> Element {
    let listing = use_listing();
    let active = listing.state().read().active_filter().token().to_string();

    rsx! {
        div {
            class: "filter-row",
            div {
                class: "filter-buttons",
                for (label, token) in FILTER_CONTROLS {
                    FilterButton {
                        key: "{token}",
                        label,
                        filter: CategoryFilter::from_token(token),
                        active: active == token,
                    }
                }
            }
            SortSelect {}
        }
    }
}

#[component]
fn FilterButton(label: &'static str, filter: CategoryFilter, active: bool) -> Element {
    let mut listing = use_listing();
    let button_type = if active {
        ButtonType::Primary
    } else {
        ButtonType::Secondary
    };

    rsx! {
        Button {
            button_type,
            on_click: move |_| listing.filter(filter.clone()),
            "{label}"
        }
    }
}

#[component]
fn SortSelect() -> Element {
    let labels: Vec<&'static str> = SortOption::iter().map(|o| o.label()).collect();

    rsx! {
        div {
            class: "sort-wrapper",
            select {
                class: "sort-select",
                for label in labels {
                    option { "{label}" }
                }
            }
        }
    }
}
