//! Results count line and pager.

use dioxus::prelude::*;

use common::search_query::{FilterUpdate, SearchFilters};
use common::search_result::SearchResponse;

use crate::data_definitions::filter_params::{UpdateOptions, update_filters};

/// Pages shown in full before the pager starts eliding.
const MAX_PLAIN_PAGES: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsSummary {
    pub start: i64,
    pub end: i64,
    pub total: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

impl ResultsSummary {
    /// Counts against the requested page and page size, which the fallback search keeps
    /// even when it answers with page 1. Saturates on hand-edited page numbers.
    pub fn new(filters: &SearchFilters, response: &SearchResponse) -> Self {
        let limit = filters.limit.max(1);
        let current_page = filters.page.max(1);
        let total = response.meta.total.max(0);
        let total_pages = if total == 0 { 1 } else { total / limit + i64::from(total % limit != 0) };
        if total == 0 {
            return Self { start: 0, end: 0, total, current_page, total_pages };
        }
        let start = (current_page - 1).saturating_mul(limit).saturating_add(1);
        let shown = i64::try_from(response.data.len()).unwrap_or(i64::MAX);
        let end = total.min(start.saturating_add(shown).saturating_sub(1));
        Self { start, end, total, current_page, total_pages }
    }

    pub fn text(&self) -> String {
        format!("Menampilkan {}-{} dari {} lowongan", self.start, self.end, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(i64),
    Ellipsis,
}

/// Pager entries: every page up to seven pages, otherwise the first, last, current and
/// neighbouring pages with an ellipsis over each gap.
pub fn build_page_items(current_page: i64, total_pages: i64) -> Vec<PageItem> {
    let total_pages = total_pages.max(1);
    if total_pages <= MAX_PLAIN_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }
    let current_page = current_page.clamp(1, total_pages);

    let mut pages = vec![1, current_page.saturating_sub(1), current_page, current_page.saturating_add(1), total_pages];
    pages.retain(|page| (1..=total_pages).contains(page));
    pages.sort_unstable();
    pages.dedup();

    let mut items = Vec::new();
    let mut previous = 0;
    for page in pages {
        if previous > 0 && page - previous > 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(page));
        previous = page;
    }
    items
}

fn go_to_page(page: i64) {
    update_filters(FilterUpdate::default().page(page), UpdateOptions::preserve_page());
}

fn page_button_style(active: bool) -> &'static str {
    if active {
        "min-width: 36px; height: 34px; border-radius: 8px; border: none; background: #1D4ED8; color: white; cursor: pointer;"
    } else {
        "min-width: 36px; height: 34px; border-radius: 8px; border: 1px solid #CBD5E1; background: white; color: #0F172A; cursor: pointer;"
    }
}

#[component]
pub fn ResultsSummaryLine(summary: ResultsSummary) -> Element {
    let text = summary.text();
    rsx! {
        h2 {
            style: "font-size: 18px; font-weight: 500; color: #334155; margin: 0;",
            "{text}"
        }
    }
}

#[component]
pub fn PaginationControls(summary: ResultsSummary, items: Vec<PageItem>) -> Element {
    if summary.total_pages <= 1 {
        return rsx! {};
    }
    let current = summary.current_page;
    let total_pages = summary.total_pages;
    let previous = current.saturating_sub(1);
    let next = current.saturating_add(1);

    rsx! {
        div {
            style: "
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                justify-content: space-between;
                gap: 12px;
                margin-top: 16px;
                padding: 12px 16px;
                border-radius: 16px;
                background: white;
                border: 1px solid #E2E8F0;
            ",
            p { style: "color: #64748B; font-size: 14px;", "Halaman {current} dari {total_pages}" }
            div {
                style: "display: flex; flex-wrap: wrap; align-items: center; gap: 8px;",
                button {
                    style: page_button_style(false),
                    disabled: current <= 1,
                    onclick: move |_| go_to_page(previous),
                    "Sebelumnya"
                }
                for (index, item) in items.into_iter().enumerate() {
                    {match item {
                        PageItem::Ellipsis => rsx! {
                            span { key: "ellipsis-{index}", style: "padding: 0 6px; color: #64748B;", "..." }
                        },
                        PageItem::Page(page) => rsx! {
                            button {
                                key: "page-{page}",
                                style: page_button_style(page == current),
                                onclick: move |_| go_to_page(page),
                                "{page}"
                            }
                        },
                    }}
                }
                button {
                    style: page_button_style(false),
                    disabled: current >= total_pages,
                    onclick: move |_| go_to_page(next),
                    "Selanjutnya"
                }
            }
        }
    }
}
