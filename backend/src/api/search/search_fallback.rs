//! Keyword broadening for searches that return nothing.
//!
//! The upstream matches keywords strictly, so an over-specific multi-word query can miss
//! listings. The fallback drops the trailing token, asks again with a wider page, and keeps
//! only the listings that still contain the full original keyword.

use common::{
    search_const::{FALLBACK_MIN_LIMIT, MAX_LIMIT},
    search_query::SearchFilters,
    search_result::{SearchMeta, SearchResponse, Vacancy},
    text_fold::fold_text,
};

use crate::api::search::search_vacancies::request_search;
use crate::api_utils::magang_api_utils::MagangApiClient;


/// The keyword without its last whitespace-delimited token; `None` when nothing would remain.
pub fn build_looser_keyword(keyword: &str) -> Option<String> {
    let tokens = keyword.split_whitespace().collect::<Vec<_>>();
    if tokens.len() <= 1 {
        return None;
    }
    Some(tokens[..tokens.len() - 1].join(" "))
}

/// Filters for the broadened request: looser keyword, first page, page size of at least 40.
pub fn fallback_filters(original: &SearchFilters) -> Option<SearchFilters> {
    let looser = build_looser_keyword(&original.q)?;
    let filters = SearchFilters {
        q: looser,
        page: 1,
        limit: original.limit.max(FALLBACK_MIN_LIMIT).min(MAX_LIMIT),
        ..original.clone()
    };
    Some(filters.normalized())
}

/// Case and diacritic insensitive substring match over the searchable listing fields.
pub fn vacancy_matches_keyword(vacancy: &Vacancy, keyword: &str) -> bool {
    let needle = fold_text(keyword);
    if needle.is_empty() {
        return false;
    }
    let program_studi = vacancy.program_studi.join(" ");
    let jenjang = vacancy.jenjang.join(" ");
    [
        vacancy.posisi.as_str(),
        vacancy.deskripsi_posisi.as_str(),
        vacancy.nama_perusahaan.as_str(),
        vacancy.nama_kabupaten.as_str(),
        vacancy.nama_provinsi.as_str(),
        program_studi.as_str(),
        jenjang.as_str(),
    ]
    .iter()
    .any(|haystack| fold_text(haystack).contains(&needle))
}

/// Keeps the fallback listings matching the original keyword. `None` when none match.
pub fn filter_fallback_response(original: &SearchFilters, fallback: SearchResponse) -> Option<SearchResponse> {
    let matched = fallback
        .data
        .into_iter()
        .filter(|vacancy| vacancy_matches_keyword(vacancy, &original.q))
        .collect::<Vec<_>>();
    if matched.is_empty() {
        return None;
    }
    let total = matched.len() as i64;
    let data = matched.into_iter().take(original.limit.max(0) as usize).collect();
    Some(SearchResponse { meta: SearchMeta { page: 1, limit: original.limit, total }, data })
}

/// Issues at most one broadened request for `original` (already normalized).
pub async fn fetch_fallback_results(
    client: &MagangApiClient,
    original: &SearchFilters,
) -> anyhow::Result<Option<SearchResponse>> {
    let Some(filters) = fallback_filters(original) else {
        return Ok(None);
    };
    tracing::info!("no results for {:?}, retrying with {:?}", original.q, filters.q);
    let response = request_search(client, &filters).await?;
    let result = filter_fallback_response(original, response);
    tracing::info!(
        "fallback for {:?} kept {} listings",
        original.q,
        result.as_ref().map(|r| r.meta.total).unwrap_or(0)
    );
    Ok(result)
}
