//! Keyword input. Typing edits a local draft; the URL only changes on Enter or the button.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use common::search_query::{FilterUpdate, SearchFilters};

use crate::data_definitions::filter_params::{UpdateOptions, update_filters};

#[component]
pub fn KeywordSearchBox(filters: ReadSignal<SearchFilters>) -> Element {
    let mut draft = use_signal(|| filters.read().q.clone());
    // navigation does not reset local signals, so follow the URL when it changes
    use_effect(move || {
        let q = filters.read().q.clone();
        draft.set(q);
    });
    let draft_has_changed = use_memo(move || draft.read().trim() != filters.read().q);
    let search_button_color = use_memo(move || if draft_has_changed() { "#1D4ED8" } else { "#6B7280" });

    let submit = move |_: ()| {
        let q = draft.read().clone();
        update_filters(FilterUpdate::default().q(q), UpdateOptions::default());
    };

    rsx! {
        div {
            id: "x-keyword-search-box",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 48px;
                border: 1px solid #CBD5E1;
                width: 100%;
                max-width: 640px;
            ",
            input {
                r#type: "search",
                placeholder: "Cari posisi, instansi, atau lokasi",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #0F172A;
                    font-size: 18px;
                ",
                value: "{draft}",
                oninput: move |event: Event<FormData>| draft.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        submit(());
                    }
                },
            }
            button {
                style: "border: none; background: none; cursor: pointer;",
                onclick: move |_| submit(()),
                Icon { icon: MdSearch, style: "width: 22px; height: 22px; color:{search_button_color()};" }
            }
        }
    }
}
