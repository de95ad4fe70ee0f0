//! Single listing lookups.

mod get_vacancy;
pub use get_vacancy::fetch_vacancy_by_id;
