use dioxus::prelude::*;

use common::search_query::SearchFilters;

use crate::components::navbar::Navbar;
use crate::pages::search_page::SearchPage;
use crate::pages::view_vacancy_page::ViewVacancyPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    // filters travel as the plain query string, see `SearchFilters`' Display / From<&str>
    #[route("/?:..query")]
    SearchPage { query: SearchFilters },


    #[route("/vacancies/:id")]
    ViewVacancyPage { id: String },

}

impl Route {
    pub fn search_page_from_filters(filters: &SearchFilters) -> Self {
        Self::SearchPage { query: filters.normalized() }
    }

    pub fn listing_home() -> Self {
        Self::SearchPage { query: SearchFilters::default() }
    }
}
