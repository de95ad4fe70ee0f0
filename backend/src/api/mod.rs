//! API calls exposed to the frontend.

pub mod search;
pub mod vacancies;
