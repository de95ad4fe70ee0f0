//! Listing search with keyword broadening on empty results.

use common::{search_query::SearchFilters, search_query_codec::to_api_params, search_result::SearchResponse};

use crate::api::search::search_fallback::fetch_fallback_results;
use crate::api_utils::magang_api_utils::MagangApiClient;

/// Searches with normalized `filters`.
///
/// When a keyword search comes back empty, one broadened request is made (see
/// [`fetch_fallback_results`]). A non-empty primary result is always returned untouched.
/// A failed request, primary or broadened, is the error of the whole search.
pub async fn search_vacancies(client: &MagangApiClient, filters: &SearchFilters) -> anyhow::Result<SearchResponse> {
    let normalized = filters.normalized();
    let primary = request_search(client, &normalized).await?;
    tracing::info!("search q={:?} page={} -> total={}", normalized.q, normalized.page, primary.meta.total);

    if normalized.q.is_empty() || primary.meta.total > 0 {
        return Ok(primary);
    }

    Ok(fetch_fallback_results(client, &normalized).await?.unwrap_or(primary))
}

pub(crate) async fn request_search(client: &MagangApiClient, filters: &SearchFilters) -> anyhow::Result<SearchResponse> {
    let url = client.endpoint(&["search"], &to_api_params(filters))?;
    client.get_json(url).await
}
