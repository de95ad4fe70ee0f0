//! Search API calls and module exports.

mod search_vacancies;
pub use search_vacancies::search_vacancies;

pub mod search_fallback;

pub mod search_facets;
pub use search_facets::{fetch_kabupaten, fetch_provinces};

mod hero_metrics;
pub use hero_metrics::fetch_hero_metrics;
