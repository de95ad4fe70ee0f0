//! The filter controller. The route is the single source of truth: every read takes the
//! router's current route, every write pushes a fresh one as a new history entry.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::search_query::{FilterUpdate, SearchFilters};

use crate::routes::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Keep the current page instead of jumping back to page 1.
    pub preserve_page: bool,
}

impl UpdateOptions {
    pub fn preserve_page() -> Self {
        Self { preserve_page: true }
    }
}

/// Filters carried by `route`; any other page reads as the defaults.
pub fn filters_of(route: &Route) -> SearchFilters {
    match route {
        Route::SearchPage { query } => query.clone(),
        _ => SearchFilters::default(),
    }
}

/// Merges `changes` over `current`, going back to page 1 unless asked not to.
pub fn next_filters(current: SearchFilters, changes: FilterUpdate, options: UpdateOptions) -> SearchFilters {
    let mut next = current.merge(changes);
    if !options.preserve_page {
        next.page = 1;
    }
    next.normalized()
}

pub fn read_current_filters() -> SearchFilters {
    // router() does not subscribe, so handlers see the route at click time
    filters_of(&router().current::<Route>())
}

pub fn update_filters(changes: FilterUpdate, options: UpdateOptions) {
    let next = next_filters(read_current_filters(), changes, options);
    tracing::debug!("navigate: /?{next}");
    navigator().push(Route::search_page_from_filters(&next));
}

pub fn reset_filters() {
    navigator().push(Route::listing_home());
}
