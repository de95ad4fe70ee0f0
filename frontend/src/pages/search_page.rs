use dioxus::prelude::*;

use common::search_query::SearchFilters;

use crate::components::hero_components::landing_hero::LandingHero;
use crate::components::search_components::keyword_search_box::KeywordSearchBox;
use crate::components::search_components::search_workspace::SearchWorkspace;

fn page_title(filters: &SearchFilters) -> String {
    if filters.q.is_empty() {
        "Cari Magang".to_string()
    } else {
        format!("Cari Magang: {}", filters.q)
    }
}

/// Listing page; the filters come straight from the URL query.
#[component]
pub fn SearchPage(query: SearchFilters) -> Element {
    let title = page_title(&query);
    rsx! {
        Title { "{title}" }
        SearchPageRootComponent { filters: query }
    }
}

#[component]
fn SearchPageRootComponent(filters: ReadSignal<SearchFilters>) -> Element {
    rsx! {
        div {
            id: "x-search-page-root-component",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                width: 100%;
                min-height: 100%;
                background: #F8FAFC;
            ",
            LandingHero {}
            div {
                style: "display: flex; justify-content: center; width: 100%; padding: 0 16px;",
                KeywordSearchBox { filters }
            }
            SearchWorkspace { filters }
        }
    }
}
