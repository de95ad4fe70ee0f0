pub mod search_page;
pub mod view_vacancy_page;
