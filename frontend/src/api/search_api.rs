//! Client API calls for search endpoints.

use common::search_query::SearchFilters;
use common::search_result::{HeroMetrics, Kabupaten, Province, SearchResponse, Vacancy};
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn server_error(e: anyhow::Error) -> ServerFnError {
    ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None }
}

#[server]
pub async fn search_listings(filters: SearchFilters) -> Result<SearchResponse, ServerFnError> {
    let client = backend::shared_client().map_err(server_error)?;
    backend::api::search::search_vacancies(client, &filters).await.map_err(server_error)
}

#[server]
pub async fn get_vacancy(id: String) -> Result<Vacancy, ServerFnError> {
    let client = backend::shared_client().map_err(server_error)?;
    backend::api::vacancies::fetch_vacancy_by_id(client, &id).await.map_err(server_error)
}

#[server]
pub async fn list_provinces() -> Result<Vec<Province>, ServerFnError> {
    let client = backend::shared_client().map_err(server_error)?;
    backend::api::search::fetch_provinces(client).await.map_err(server_error)
}

#[server]
pub async fn list_kabupaten(kode_provinsi: String) -> Result<Vec<Kabupaten>, ServerFnError> {
    let client = backend::shared_client().map_err(server_error)?;
    backend::api::search::fetch_kabupaten(client, &kode_provinsi).await.map_err(server_error)
}

#[server]
pub async fn get_hero_metrics() -> Result<HeroMetrics, ServerFnError> {
    let client = backend::shared_client().map_err(server_error)?;
    backend::api::search::fetch_hero_metrics(client).await.map_err(server_error)
}
