use dioxus::prelude::*;

use common::search_query::ActiveFilter;

use crate::data_definitions::filter_params::{UpdateOptions, reset_filters, update_filters};

#[component]
pub fn ActiveFilterChips(chips: Vec<ActiveFilter>) -> Element {
    if chips.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; align-items: center; gap: 8px;",
            for (key, label, remove) in chips.into_iter().map(|chip| (chip.key, chip.label, chip.remove)) {
                button {
                    key: "{key}",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        padding: 4px 10px;
                        border-radius: 9999px;
                        border: 1px solid #BFDBFE;
                        background: #EFF6FF;
                        color: #1E3A8A;
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| update_filters(remove.clone(), UpdateOptions::default()),
                    span { "{label}" }
                    span { style: "font-weight: 700;", "×" }
                }
            }
            button {
                style: "border: none; background: none; color: #64748B; font-size: 13px; cursor: pointer; text-decoration: underline;",
                onclick: move |_| reset_filters(),
                "Hapus semua filter"
            }
        }
    }
}
