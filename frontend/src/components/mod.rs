pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod search_components;
pub mod vacancy_components;
pub mod hero_components;
