//! The listing workspace: filter panel on the left, results on the right.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::program_studi::ProgramCatalog;
use common::search_query::{ActiveFilter, SearchFilters};
use common::search_result::{SearchResponse, jenjang_preview};

use crate::api::search_api::search_listings;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::search_components::active_filter_chips::ActiveFilterChips;
use crate::components::search_components::filter_panel::FilterPanel;
use crate::components::search_components::results_summary::{
    PageItem, PaginationControls, ResultsSummary, ResultsSummaryLine, build_page_items,
};
use crate::components::search_components::vacancy_card::VacancyCard;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::filter_params::reset_filters;
use crate::data_definitions::search_session::SearchSession;

/// Everything the results side renders for one applied search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPageState {
    pub filters: SearchFilters,
    pub summary: ResultsSummary,
    pub pagination: Vec<PageItem>,
    pub active_filters: Vec<ActiveFilter>,
    pub jenjang_preview: BTreeMap<String, usize>,
    pub response: SearchResponse,
}

impl SearchPageState {
    pub fn new(filters: SearchFilters, response: SearchResponse) -> Self {
        let summary = ResultsSummary::new(&filters, &response);
        Self {
            pagination: build_page_items(summary.current_page, summary.total_pages),
            active_filters: filters.active_filters(),
            jenjang_preview: jenjang_preview(&response.data),
            summary,
            filters,
            response,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Ready(Box<SearchPageState>),
    /// A newer search started while this one was in flight.
    Stale,
    Failed { message: String },
}

/// Runs `search` under a session ticket so only the latest request's response is applied.
pub async fn run_search<F, Fut, E>(session: &SearchSession, filters: &SearchFilters, search: F) -> SearchOutcome
where
    F: FnOnce(SearchFilters) -> Fut,
    Fut: Future<Output = Result<SearchResponse, E>>,
    E: Display,
{
    let ticket = session.begin(filters);
    let result = search(ticket.filters().clone()).await;
    match session.finish(&ticket, result) {
        None => SearchOutcome::Stale,
        Some(Ok(response)) => SearchOutcome::Ready(Box::new(SearchPageState::new(ticket.filters().clone(), response))),
        Some(Err(e)) => {
            tracing::warn!("search failed for /?{}: {e}", ticket.filters());
            SearchOutcome::Failed { message: e.to_string() }
        }
    }
}

#[component]
pub fn SearchWorkspace(filters: ReadSignal<SearchFilters>) -> Element {
    let session = use_hook(|| Rc::new(SearchSession::new()));
    let mut catalog = use_signal(ProgramCatalog::new);

    let outcome = use_resource(move || {
        let session = session.clone();
        let filters = filters.read().clone();
        async move {
            let outcome = run_search(&session, &filters, search_listings).await;
            if let SearchOutcome::Ready(state) = &outcome {
                catalog.write().observe_vacancies(&state.response.data);
            }
            outcome
        }
    });

    let program_options = catalog.read().options();
    let outcome = outcome.read();
    let (jenjang_counts, results) = match outcome.as_ref() {
        Some(SearchOutcome::Ready(state)) => (state.jenjang_preview.clone(), rsx! { SearchResults { state: *state.clone() } }),
        Some(SearchOutcome::Failed { message }) => (
            BTreeMap::new(),
            rsx! {
                ComponentErrorDisplay {
                    error_txt: message.clone(),
                    button {
                        style: "color:#1D4ED8; font-size: 16px; border: 1px solid #1D4ED8; padding: 8px 14px; border-radius: 8px; background: white; cursor: pointer;",
                        onclick: move |_| reset_filters(),
                        "Atur ulang filter"
                    }
                }
            },
        ),
        Some(SearchOutcome::Stale) | None => (BTreeMap::new(), rsx! { LoadingIndicator {} }),
    };

    rsx! {
        div {
            id: "x-search-workspace",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: flex-start;
                gap: 24px;
                width: 100%;
                max-width: 1200px;
                margin: 0 auto;
                padding: 24px 16px;
            ",
            div {
                style: "flex: 0 0 300px; min-width: 260px;",
                FilterPanel { filters, program_options, jenjang_counts }
            }
            div {
                style: "flex: 1 1 600px; min-width: 320px; display: flex; flex-direction: column; gap: 12px;",
                {results}
            }
        }
    }
}

#[component]
fn SearchResults(state: SearchPageState) -> Element {
    let SearchPageState { summary, pagination, active_filters, response, .. } = state;

    rsx! {
        ResultsSummaryLine { summary }
        ActiveFilterChips { chips: active_filters }
        if response.data.is_empty() {
            div {
                style: "padding: 32px; border-radius: 16px; background: white; border: 1px dashed #CBD5E1; text-align: center; color: #475569;",
                p { style: "font-size: 18px; margin: 0 0 8px 0;", "Tidak ada lowongan yang cocok" }
                p { style: "font-size: 14px; margin: 0;", "Coba ubah kata kunci atau kurangi filter." }
            }
        } else {
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 12px;",
                for vacancy in response.data.into_iter() {
                    VacancyCard { key: "{vacancy.id}-{vacancy.id_posisi}", vacancy }
                }
            }
        }
        PaginationControls { summary, items: pagination }
    }
}

#[cfg(test)]
mod tests {
    use common::search_result::SearchMeta;

    use super::*;

    fn response(total: i64, programs: &[&str]) -> SearchResponse {
        let vacancy = serde_json::from_value(serde_json::json!({
            "id": "1",
            "posisi": "Data Analyst",
            "program_studi": programs,
            "jenjang": ["Sarjana", "Diploma"],
        }))
        .unwrap();
        SearchResponse { meta: SearchMeta { page: 1, limit: 20, total }, data: vec![vacancy] }
    }

    #[tokio::test]
    async fn successful_search_builds_the_page_state() {
        let session = SearchSession::new();
        let filters = SearchFilters::from("q=data&status=open");

        let outcome = run_search(&session, &filters, |_| async { Ok::<_, String>(response(45, &[])) }).await;
        let SearchOutcome::Ready(state) = outcome else { panic!("expected a ready state") };
        assert_eq!(state.summary.text(), "Menampilkan 1-1 dari 45 lowongan");
        assert_eq!(state.pagination, build_page_items(1, 3));
        assert_eq!(state.active_filters.len(), 2);
        assert_eq!(state.jenjang_preview.get("Diploma"), Some(&1));
    }

    #[tokio::test]
    async fn search_receives_normalized_filters() {
        let session = SearchSession::new();
        let filters = SearchFilters { q: "  data  ".into(), kabupaten: "Bandung".into(), ..SearchFilters::default() };

        let outcome = run_search(&session, &filters, |sent: SearchFilters| async move {
            assert_eq!(sent.q, "data");
            assert_eq!(sent.kabupaten, "");
            Ok::<_, String>(response(0, &[]))
        })
        .await;
        assert!(matches!(outcome, SearchOutcome::Ready(_)));
    }

    #[tokio::test]
    async fn failed_search_keeps_the_message() {
        let session = SearchSession::new();
        let outcome = run_search(&session, &SearchFilters::default(), |_| async {
            Err::<SearchResponse, _>("upstream returned 502")
        })
        .await;
        assert_eq!(outcome, SearchOutcome::Failed { message: "upstream returned 502".into() });
    }

    #[tokio::test]
    async fn older_search_finishing_last_is_stale() {
        let session = SearchSession::new();
        let older = SearchFilters::from("q=data");
        let newer = SearchFilters::from("q=design");

        let (first, second) = tokio::join!(
            run_search(&session, &older, |_| async {
                tokio::task::yield_now().await;
                tokio::task::yield_now().await;
                Ok::<_, String>(response(1, &[]))
            }),
            run_search(&session, &newer, |_| async { Ok::<_, String>(response(2, &[])) }),
        );
        assert_eq!(first, SearchOutcome::Stale);
        let SearchOutcome::Ready(state) = second else { panic!("expected the newer search to apply") };
        assert_eq!(state.filters.q, "design");
        assert_eq!(state.summary.total, 2);
    }

    #[tokio::test]
    async fn catalog_grows_with_fetched_programs() {
        let session = SearchSession::new();
        let mut catalog = ProgramCatalog::new();
        let before = catalog.len();

        let outcome = run_search(&session, &SearchFilters::default(), |_| async {
            Ok::<_, String>(response(1, &["Teknik Kelautan Terapan", "teknik   kelautan terapan"]))
        })
        .await;
        let SearchOutcome::Ready(state) = outcome else { panic!("expected a ready state") };
        catalog.observe_vacancies(&state.response.data);

        assert_eq!(catalog.len(), before + 1);
        assert!(catalog.options().contains(&"Teknik Kelautan Terapan".to_string()));
    }
}
