use dioxus::prelude::*;

use common::search_result::{Vacancy, parse_timestamp};

use crate::routes::Route;

/// "Kabupaten, Provinsi", skipping whichever part is missing.
pub fn location_label(vacancy: &Vacancy) -> String {
    let parts = [vacancy.nama_kabupaten.trim(), vacancy.nama_provinsi.trim()];
    let label = parts.into_iter().filter(|part| !part.is_empty()).collect::<Vec<_>>().join(", ");
    if label.is_empty() { "Lokasi belum tersedia".to_string() } else { label }
}

pub fn deadline_label(pendaftaran_akhir: Option<&str>) -> String {
    match parse_timestamp(pendaftaran_akhir) {
        Some(end) => format!("Pendaftaran ditutup {}", end.format("%d/%m/%Y")),
        None => "Batas pendaftaran belum diumumkan".to_string(),
    }
}

#[component]
pub fn VacancyCard(vacancy: Vacancy) -> Element {
    let location = location_label(&vacancy);
    let deadline = deadline_label(vacancy.pendaftaran_akhir.as_deref());
    let remaining = vacancy.remaining_quota();
    let route = Route::ViewVacancyPage { id: vacancy.detail_id().to_string() };

    rsx! {
        Link {
            to: route,
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    height: 100%;
                    padding: 16px;
                    border-radius: 16px;
                    background: white;
                    border: 1px solid #E2E8F0;
                    color: #0F172A;
                ",
                h3 { style: "margin: 0; font-size: 17px; color: #1D4ED8;", "{vacancy.posisi}" }
                p { style: "margin: 0; font-size: 14px; color: #334155;", "{vacancy.nama_perusahaan}" }
                p { style: "margin: 0; font-size: 13px; color: #64748B;", "{location}" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    for level in vacancy.jenjang.iter() {
                        span {
                            key: "{level}",
                            style: "padding: 2px 8px; border-radius: 9999px; background: #F1F5F9; font-size: 12px; color: #475569;",
                            "{level}"
                        }
                    }
                }
                p { style: "margin: 0; font-size: 13px; color: #475569;", "Sisa kuota: {remaining} dari {vacancy.jumlah_kuota}" }
                p { style: "margin: 0; font-size: 13px; color: #B45309;", "{deadline}" }
            }
        }
    }
}
