//! Left-hand filter panel. Each control writes straight to the URL through the filter
//! controller; nothing here keeps its own copy of the filters.

use std::collections::BTreeMap;
use std::fmt::Display;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::search_const::{JENJANG_OPTIONS, SortOrder, VacancyStatus};
use common::search_query::{FilterUpdate, SearchFilters};

use crate::api::search_api::{list_kabupaten, list_provinces};
use crate::data_definitions::filter_params::{UpdateOptions, read_current_filters, reset_filters, update_filters};

/// Adds `value` to `selected`, or removes it if it is already there.
pub fn toggle_value(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|item| item == value) {
        selected.iter().filter(|item| *item != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Region pickers stay usable when a facet request fails; they just offer nothing.
pub fn options_or_empty<T, E: Display>(what: &str, result: Result<Vec<T>, E>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!("failed to load {what}: {e}");
        Vec::new()
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JenjangRow {
    pub level: &'static str,
    pub count: usize,
    pub checked: bool,
}

/// One row per education level with its count among the current results.
pub fn jenjang_rows(selected: &[String], counts: &BTreeMap<String, usize>) -> Vec<JenjangRow> {
    JENJANG_OPTIONS
        .iter()
        .map(|level| JenjangRow {
            level,
            count: counts.get(*level).copied().unwrap_or(0),
            checked: selected.iter().any(|item| item == level),
        })
        .collect()
}

fn apply(changes: FilterUpdate) {
    update_filters(changes, UpdateOptions::default());
}

const SECTION_STYLE: &str = "display: flex; flex-direction: column; gap: 6px; padding: 12px 0; border-bottom: 1px solid #E2E8F0;";
const LABEL_STYLE: &str = "font-size: 13px; font-weight: 600; color: #475569; text-transform: uppercase; letter-spacing: 0.04em;";
const SELECT_STYLE: &str = "height: 36px; border-radius: 8px; border: 1px solid #CBD5E1; padding: 0 8px; background: white; color: #0F172A;";

#[component]
pub fn FilterPanel(
    filters: ReadSignal<SearchFilters>,
    program_options: Vec<String>,
    jenjang_counts: BTreeMap<String, usize>,
) -> Element {
    let provinces = use_resource(list_provinces);
    let kabupaten = use_resource(move || {
        let kode_provinsi = filters.read().kode_provinsi.clone();
        async move {
            if kode_provinsi.is_empty() {
                return Vec::new();
            }
            options_or_empty("kabupaten", list_kabupaten(kode_provinsi).await)
        }
    });

    let current = filters.read().clone();
    let provinces = match provinces.read().as_ref() {
        Some(result) => options_or_empty("provinces", result.clone()),
        None => Vec::new(),
    };
    let kabupaten = kabupaten.read().clone().unwrap_or_default();
    let rows = jenjang_rows(&current.jenjang, &jenjang_counts);
    let has_province = !current.kode_provinsi.is_empty();
    let has_active_filters = current.has_active_filters();
    let only_new = current.only_new;

    rsx! {
        aside {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                padding: 8px 16px 16px 16px;
                border-radius: 16px;
                background: white;
                border: 1px solid #E2E8F0;
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 8px 0;",
                h3 { style: "margin: 0; font-size: 18px; color: #0F172A;", "Filter" }
                if has_active_filters {
                    button {
                        style: "border: none; background: none; color: #1D4ED8; cursor: pointer; font-size: 14px;",
                        onclick: move |_| reset_filters(),
                        "Hapus semua"
                    }
                }
            }

            div {
                style: SECTION_STYLE,
                label { style: LABEL_STYLE, "Provinsi" }
                select {
                    style: SELECT_STYLE,
                    value: "{current.kode_provinsi}",
                    onchange: move |event: Event<FormData>| apply(FilterUpdate::province(event.value())),
                    option { value: "", "Semua provinsi" }
                    for province in provinces.into_iter() {
                        option {
                            key: "{province.kode_provinsi}",
                            value: "{province.kode_provinsi}",
                            selected: province.kode_provinsi == current.kode_provinsi,
                            "{province.nama_provinsi}"
                        }
                    }
                }
                label { style: LABEL_STYLE, "Kabupaten/Kota" }
                select {
                    style: SELECT_STYLE,
                    disabled: !has_province,
                    value: "{current.kabupaten}",
                    onchange: move |event: Event<FormData>| apply(FilterUpdate::default().kabupaten(event.value())),
                    option { value: "", "Semua kabupaten/kota" }
                    for item in kabupaten.into_iter() {
                        option {
                            key: "{item.nama_kabupaten}",
                            value: "{item.nama_kabupaten}",
                            selected: item.nama_kabupaten == current.kabupaten,
                            "{item.nama_kabupaten}"
                        }
                    }
                }
            }

            div {
                style: SECTION_STYLE,
                label { style: LABEL_STYLE, "Jenjang" }
                for row in rows.into_iter() {
                    label {
                        key: "{row.level}",
                        style: "display: flex; align-items: center; gap: 8px; color: #0F172A; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: row.checked,
                            onchange: move |_| {
                                let selected = read_current_filters().jenjang;
                                apply(FilterUpdate::default().jenjang(toggle_value(&selected, row.level)));
                            },
                        }
                        span { style: "flex: 1;", "{row.level}" }
                        span { style: "color: #94A3B8; font-size: 13px;", "{row.count}" }
                    }
                }
            }

            div {
                style: SECTION_STYLE,
                label { style: LABEL_STYLE, "Program studi" }
                select {
                    style: SELECT_STYLE,
                    value: "",
                    onchange: move |event: Event<FormData>| {
                        let value = event.value();
                        if value.is_empty() {
                            return;
                        }
                        let selected = read_current_filters().prodi;
                        apply(FilterUpdate::default().prodi(toggle_value(&selected, &value)));
                    },
                    option { value: "", "Pilih program studi" }
                    for program in program_options.into_iter() {
                        option {
                            key: "{program}",
                            value: "{program}",
                            if current.prodi.contains(&program) { "✓ {program}" } else { "{program}" }
                        }
                    }
                }
            }

            div {
                style: SECTION_STYLE,
                label { style: LABEL_STYLE, "Status pendaftaran" }
                select {
                    style: SELECT_STYLE,
                    value: "{current.status.as_str()}",
                    onchange: move |event: Event<FormData>| {
                        let status = VacancyStatus::parse(&event.value()).unwrap_or_default();
                        apply(FilterUpdate::default().status(status));
                    },
                    for status in VacancyStatus::ALL {
                        option {
                            key: "{status.as_str()}",
                            value: "{status.as_str()}",
                            selected: status == current.status,
                            "{status.label()}"
                        }
                    }
                }
                label {
                    style: "display: flex; align-items: center; gap: 8px; color: #0F172A; cursor: pointer;",
                    input {
                        r#type: "checkbox",
                        checked: only_new,
                        onchange: move |_| apply(FilterUpdate::default().only_new(!only_new)),
                    }
                    "Hanya lowongan baru"
                }
            }

            div {
                style: SECTION_STYLE,
                label { style: LABEL_STYLE, "Urutkan" }
                select {
                    style: SELECT_STYLE,
                    value: "{current.sort.as_str()}",
                    onchange: move |event: Event<FormData>| {
                        let sort = SortOrder::parse(&event.value()).unwrap_or_default();
                        apply(FilterUpdate::default().sort(sort));
                    },
                    for sort in SortOrder::ALL {
                        option {
                            key: "{sort.as_str()}",
                            value: "{sort.as_str()}",
                            selected: sort == current.sort,
                            "{sort.label()}"
                        }
                    }
                }
            }
        }
    }
}
