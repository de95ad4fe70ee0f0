use dioxus::prelude::*;

use crate::api::search_api::get_vacancy;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::components::vacancy_components::vacancy_detail::{VacancyDetailState, VacancyDetailView};

/// Vacancy detail page
#[component]
pub fn ViewVacancyPage(id: String) -> Element {
    rsx! {
        Title { "Cari Magang - Detail Lowongan" }
        ViewVacancyRoot { id }
    }
}

#[component]
fn ViewVacancyRoot(id: ReadSignal<String>) -> Element {
    let mut detail = use_resource(move || {
        let id = id.read().clone();
        async move {
            let result = get_vacancy(id.clone()).await;
            VacancyDetailState::from_result(&id, result)
        }
    });
    let on_retry = Callback::new(move |_: ()| detail.restart());

    let state = detail.read().clone();
    match state {
        Some(state) => rsx! { VacancyDetailView { state, on_retry } },
        None => rsx! { LoadingIndicator {} },
    }
}
