//! Full listing detail, or an error panel with a way back to the listing.

use std::fmt::Display;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::search_result::Vacancy;

use crate::components::error_boundary::{BackToListingLink, ComponentErrorDisplay};
use crate::components::search_components::vacancy_card::{deadline_label, location_label};

#[derive(Debug, Clone, PartialEq)]
pub enum VacancyDetailState {
    Loaded(Box<Vacancy>),
    Failed { message: String },
}

impl VacancyDetailState {
    pub fn from_result<E: Display>(id: &str, result: Result<Vacancy, E>) -> Self {
        match result {
            Ok(vacancy) => Self::Loaded(Box::new(vacancy)),
            Err(e) => {
                tracing::warn!("failed to load vacancy {id}: {e}");
                Self::Failed { message: e.to_string() }
            }
        }
    }
}

/// Non-empty program list, or a placeholder.
pub fn programs_label(vacancy: &Vacancy) -> String {
    if vacancy.program_studi.is_empty() {
        "Semua program studi".to_string()
    } else {
        vacancy.program_studi.join(", ")
    }
}

#[component]
pub fn VacancyDetailView(state: VacancyDetailState, on_retry: Callback<()>) -> Element {
    let vacancy = match state {
        VacancyDetailState::Loaded(vacancy) => vacancy,
        VacancyDetailState::Failed { message } => {
            return rsx! {
                ComponentErrorDisplay {
                    error_txt: message,
                    div {
                        style: "display: flex; gap: 16px; align-items: center;",
                        button {
                            style: "color:#1D4ED8; font-size: 16px; border: 1px solid #1D4ED8; padding: 8px 14px; border-radius: 8px; background: white; cursor: pointer;",
                            onclick: move |_| on_retry(()),
                            "Coba lagi"
                        }
                        BackToListingLink {}
                    }
                }
            };
        }
    };
    let location = location_label(&vacancy);
    let deadline = deadline_label(vacancy.pendaftaran_akhir.as_deref());
    let programs = programs_label(&vacancy);
    let levels = vacancy.jenjang.join(", ");
    let remaining = vacancy.remaining_quota();

    rsx! {
        article {
            id: "x-vacancy-detail",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                max-width: 860px;
                margin: 24px auto;
                padding: 24px;
                border-radius: 16px;
                background: white;
                border: 1px solid #E2E8F0;
                color: #0F172A;
            ",
            BackToListingLink {}
            h1 { style: "margin: 0; font-size: 28px;", "{vacancy.posisi}" }
            p { style: "margin: 0; font-size: 16px; color: #334155;", "{vacancy.nama_perusahaan}" }
            if !vacancy.agency.is_empty() {
                p { style: "margin: 0; font-size: 14px; color: #64748B;", "{vacancy.agency} {vacancy.sub_agency}" }
            }
            p { style: "margin: 0; font-size: 14px; color: #64748B;", "{location}" }
            dl {
                style: "display: grid; grid-template-columns: 180px 1fr; gap: 6px 16px; margin: 8px 0;",
                dt { "Jenjang" }
                dd { style: "margin: 0;", "{levels}" }
                dt { "Program studi" }
                dd { style: "margin: 0;", "{programs}" }
                dt { "Kuota" }
                dd { style: "margin: 0;", "{remaining} tersisa dari {vacancy.jumlah_kuota}" }
                dt { "Pendaftaran" }
                dd { style: "margin: 0;", "{deadline}" }
            }
            div {
                style: "white-space: pre-wrap; line-height: 1.6; font-size: 15px;",
                "{vacancy.deskripsi_posisi}"
            }
            if !vacancy.url_original.is_empty() {
                a {
                    href: "{vacancy.url_original}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    style: "color: #1D4ED8; font-size: 15px;",
                    "Lihat di situs asli"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy() -> Vacancy {
        serde_json::from_value(serde_json::json!({"id": "9", "id_posisi": "42", "posisi": "Data Analyst"})).unwrap()
    }

    #[test]
    fn loaded_detail_keeps_the_vacancy() {
        let state = VacancyDetailState::from_result::<String>("42", Ok(vacancy()));
        let VacancyDetailState::Loaded(loaded) = state else { panic!("expected a loaded detail") };
        assert_eq!(loaded.detail_id(), "42");
        assert_eq!(programs_label(&loaded), "Semua program studi");
    }

    #[test]
    fn failed_detail_carries_the_error() {
        let state = VacancyDetailState::from_result("42", Err("upstream returned 404 for /vacancies/42"));
        assert_eq!(state, VacancyDetailState::Failed { message: "upstream returned 404 for /vacancies/42".into() });
    }
}
