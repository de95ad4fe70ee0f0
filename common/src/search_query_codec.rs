//! Conversion between `SearchFilters` and URL query strings.
//!
//! Decoding is permissive: anything malformed or out of vocabulary falls back to its
//! default, because the URL is user-editable and must never break the page. Encoding emits
//! only non-default values, in field order, so every filter state has one minimal URL.

use std::collections::HashMap;
use std::fmt;

use url::form_urlencoded;

use crate::program_studi::canonicalize_program_label;
use crate::search_const::{LIST_DELIMITER, MAX_LIMIT, SortOrder, VacancyStatus, is_jenjang_value};
use crate::search_query::SearchFilters;


fn csv_to_vec(value: Option<&str>) -> Vec<String> {
    value
        .map(|value| {
            value
                .split(LIST_DELIMITER)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_bool(value: Option<&str>) -> bool {
    matches!(value, Some("true") | Some("1"))
}

fn parse_int(value: Option<&str>) -> Option<i64> {
    value?.trim().parse::<i64>().ok()
}

/// Decodes filters from key/value pairs. Repeated keys: the last one wins.
pub fn decode_params<I, K, V>(params: I) -> SearchFilters
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let params = params
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect::<HashMap<String, String>>();
    let get = |key: &str| params.get(key).map(String::as_str);
    let defaults = SearchFilters::default();

    SearchFilters {
        q: get("q").unwrap_or_default().to_string(),
        kode_provinsi: get("kode_provinsi").unwrap_or_default().to_string(),
        kabupaten: get("kabupaten").unwrap_or_default().to_string(),
        jenjang: csv_to_vec(get("jenjang")).into_iter().filter(|value| is_jenjang_value(value)).collect(),
        prodi: csv_to_vec(get("prodi")),
        status: get("status").and_then(VacancyStatus::parse).unwrap_or(defaults.status),
        only_new: parse_bool(get("only_new")),
        sort: get("sort").and_then(SortOrder::parse).unwrap_or(defaults.sort),
        page: parse_int(get("page")).map(|page| page.max(1)).unwrap_or(defaults.page),
        limit: parse_int(get("limit")).map(|limit| limit.clamp(1, MAX_LIMIT)).unwrap_or(defaults.limit),
    }
}

/// Decodes filters from a raw query string, with or without the leading `?`.
pub fn decode_query_string(query: &str) -> SearchFilters {
    let query = query.strip_prefix('?').unwrap_or(query);
    decode_params(form_urlencoded::parse(query.as_bytes()))
}

/// The non-default parameters of `filters`, in field declaration order.
pub fn to_api_params(filters: &SearchFilters) -> Vec<(&'static str, String)> {
    let defaults = SearchFilters::default();
    let mut params = Vec::new();
    if !filters.q.is_empty() {
        params.push(("q", filters.q.clone()));
    }
    if !filters.kode_provinsi.is_empty() {
        params.push(("kode_provinsi", filters.kode_provinsi.clone()));
    }
    if !filters.kabupaten.is_empty() {
        params.push(("kabupaten", filters.kabupaten.clone()));
    }
    if !filters.jenjang.is_empty() {
        params.push(("jenjang", filters.jenjang.join(",")));
    }
    if !filters.prodi.is_empty() {
        params.push(("prodi", filters.prodi.join(",")));
    }
    if filters.status != defaults.status {
        params.push(("status", filters.status.as_str().to_string()));
    }
    if filters.only_new {
        params.push(("only_new", "true".to_string()));
    }
    if filters.sort != defaults.sort {
        params.push(("sort", filters.sort.as_str().to_string()));
    }
    if filters.page != defaults.page {
        params.push(("page", filters.page.to_string()));
    }
    if filters.limit != defaults.limit {
        params.push(("limit", filters.limit.to_string()));
    }
    params
}

/// Minimal form-urlencoded query string (no leading `?`). The default filters encode to `""`.
pub fn encode_query_string(filters: &SearchFilters) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in to_api_params(filters) {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}

/// Vocabulary filtering and clamping applied before filters build a request or a URL.
/// Never fails and is idempotent.
pub fn normalize_filters(filters: &SearchFilters) -> SearchFilters {
    let mut jenjang: Vec<String> = Vec::new();
    for value in filters.jenjang.iter().filter(|value| is_jenjang_value(value)) {
        if !jenjang.contains(value) {
            jenjang.push(value.clone());
        }
    }

    // entries holding the delimiter would split differently after a URL round trip
    let mut prodi: Vec<String> = Vec::new();
    for label in filters
        .prodi
        .iter()
        .flat_map(|entry| entry.split(LIST_DELIMITER))
        .map(canonicalize_program_label)
    {
        if !label.is_empty() && !prodi.contains(&label) {
            prodi.push(label);
        }
    }

    let kode_provinsi = filters.kode_provinsi.trim().to_string();
    let kabupaten = if kode_provinsi.is_empty() { String::new() } else { filters.kabupaten.trim().to_string() };

    SearchFilters {
        q: filters.q.trim().to_string(),
        kode_provinsi,
        kabupaten,
        jenjang,
        prodi,
        status: filters.status,
        only_new: filters.only_new,
        sort: filters.sort,
        page: filters.page.max(1),
        limit: filters.limit.clamp(1, MAX_LIMIT),
    }
}

/// The minimal query string, as used by the search route.
impl fmt::Display for SearchFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_query_string(self))
    }
}

impl From<&str> for SearchFilters {
    fn from(query: &str) -> Self {
        decode_query_string(query)
    }
}

impl SearchFilters {
    pub fn from_query_string(query: &str) -> Self {
        decode_query_string(query)
    }

    pub fn to_query_string(&self) -> String {
        encode_query_string(self)
    }

    pub fn normalized(&self) -> Self {
        normalize_filters(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_filters() -> Vec<SearchFilters> {
        vec![
            SearchFilters::default(),
            SearchFilters { q: "data analyst".into(), status: VacancyStatus::Open, ..SearchFilters::default() },
            SearchFilters {
                q: "désign & co".into(),
                kode_provinsi: "31".into(),
                kabupaten: "Jakarta Selatan".into(),
                jenjang: vec!["Sarjana".into(), "Diploma".into()],
                prodi: vec!["Teknik Informatika".into(), "Ilmu Gizi".into(), "Akuntansi, Pajak".into()],
                status: VacancyStatus::Closed,
                only_new: true,
                sort: SortOrder::Deadline,
                page: 7,
                limit: 100,
            },
            SearchFilters { page: -4, limit: 0, kabupaten: "Bandung".into(), ..SearchFilters::default() },
            SearchFilters { limit: 1, prodi: vec!["  ".into(), "psikologi".into()], ..SearchFilters::default() },
        ]
    }

    #[test]
    fn parses_url_params_into_typed_filters() {
        let filters = decode_query_string("q=data&jenjang=Diploma,Sarjana&status=open&only_new=true&page=3&limit=40");
        assert_eq!(filters.q, "data");
        assert_eq!(filters.jenjang, vec!["Diploma".to_string(), "Sarjana".to_string()]);
        assert_eq!(filters.status, VacancyStatus::Open);
        assert!(filters.only_new);
        assert_eq!(filters.page, 3);
        assert_eq!(filters.limit, 40);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let filters = decode_query_string("?status=maybe&sort=oldest&page=abc&limit=&only_new=yes&jenjang=,, ,");
        assert_eq!(filters, SearchFilters::default());

        let filters = decode_query_string("page=-3&limit=500&only_new=1");
        assert_eq!(filters.page, 1);
        assert_eq!(filters.limit, 100);
        assert!(filters.only_new);
    }

    #[test]
    fn last_duplicate_param_wins() {
        let filters = decode_query_string("q=first&q=second");
        assert_eq!(filters.q, "second");
    }

    #[test]
    fn list_entries_are_trimmed() {
        let filters = decode_query_string("prodi=%20Hukum%20,,Farmasi");
        assert_eq!(filters.prodi, vec!["Hukum".to_string(), "Farmasi".to_string()]);
    }

    #[test]
    fn drops_default_values_when_serializing() {
        assert_eq!(encode_query_string(&SearchFilters::default()), "");

        let filters = SearchFilters { q: "designer".into(), status: VacancyStatus::Open, ..SearchFilters::default() };
        assert_eq!(encode_query_string(&filters), "q=designer&status=open");
    }

    #[test]
    fn encodes_in_field_order_with_form_escaping() {
        let filters = SearchFilters {
            q: "data analyst".into(),
            jenjang: vec!["Diploma".into(), "Sarjana".into()],
            only_new: true,
            page: 2,
            ..SearchFilters::default()
        };
        assert_eq!(encode_query_string(&filters), "q=data+analyst&jenjang=Diploma%2CSarjana&only_new=true&page=2");
    }

    #[test]
    fn normalizes_jenjang_and_prodi() {
        let filters = SearchFilters {
            jenjang: vec!["Diploma".into(), "Invalid".into()],
            prodi: vec!["Teknik Informatika".into(), "teknik informatika".into(), "  ".into()],
            page: -1,
            limit: 200,
            ..SearchFilters::default()
        };
        let normalized = normalize_filters(&filters);
        assert_eq!(normalized.jenjang, vec!["Diploma".to_string()]);
        assert_eq!(normalized.prodi, vec!["Teknik Informatika".to_string()]);
        assert_eq!(normalized.page, 1);
        assert_eq!(normalized.limit, 100);
    }

    #[test]
    fn decode_drops_unknown_jenjang() {
        let filters = decode_query_string("jenjang=Diploma,Invalid");
        assert_eq!(filters.jenjang, vec!["Diploma".to_string()]);
        assert_eq!(
            filters.active_filters().iter().map(|chip| chip.key.as_str()).collect::<Vec<_>>(),
            vec!["jenjang-Diploma"]
        );
    }

    #[test]
    fn display_and_from_str_use_the_query_string() {
        let filters = SearchFilters::from("?q=data+analyst&status=open");
        assert_eq!(filters.q, "data analyst");
        assert_eq!(filters.to_string(), "q=data+analyst&status=open");
        assert_eq!(SearchFilters::default().to_string(), "");
    }

    #[test]
    fn normalize_drops_orphan_kabupaten_and_trims_keyword() {
        let filters = SearchFilters { q: "  data  ".into(), kabupaten: "Bandung".into(), ..SearchFilters::default() };
        let normalized = filters.normalized();
        assert_eq!(normalized.q, "data");
        assert_eq!(normalized.kabupaten, "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for filters in sample_filters() {
            let once = normalize_filters(&filters);
            assert_eq!(normalize_filters(&once), once);
        }
    }

    #[test]
    fn normalized_filters_round_trip_through_the_url() {
        for filters in sample_filters() {
            let normalized = filters.normalized();
            let decoded = SearchFilters::from_query_string(&normalized.to_query_string());
            assert_eq!(decoded, normalized);
        }
    }

    #[test]
    fn api_params_match_query_string() {
        let filters = SearchFilters { kode_provinsi: "31".into(), limit: 40, ..SearchFilters::default() };
        assert_eq!(
            to_api_params(&filters),
            vec![("kode_provinsi", "31".to_string()), ("limit", "40".to_string())]
        );
    }
}
