//! Listing, search-result and facet payloads returned by the magang API.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::payload_coercion::{
    bool_or_true, coerce_i64, default_true, empty_object, number_or_zero, object_or_empty, optional_string,
    string_list, string_or_empty,
};
use crate::search_const::{DEFAULT_LIMIT, RECENT_WINDOW_HOURS};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meta: SearchMeta,
    #[serde(default)]
    pub data: Vec<Vacancy>,
}

impl SearchResponse {
    pub fn empty(page: i64, limit: i64) -> Self {
        Self { meta: SearchMeta { page, limit, total: 0 }, data: Vec::new() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMeta {
    #[serde(default = "default_page", deserialize_with = "page_or_default")]
    pub page: i64,
    #[serde(default = "default_limit", deserialize_with = "limit_or_default")]
    pub limit: i64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total: i64,
}

impl Default for SearchMeta {
    fn default() -> Self {
        Self { page: default_page(), limit: default_limit(), total: 0 }
    }
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

fn page_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(coerce_i64(Option::<Value>::deserialize(deserializer)?).unwrap_or_else(default_page))
}

fn limit_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(coerce_i64(Option::<Value>::deserialize(deserializer)?).unwrap_or_else(default_limit))
}

/// Landing-page counters: every listing, and listings first seen within the recent window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroMetrics {
    pub total: i64,
    pub new_count: i64,
}

/// One internship listing. Every field tolerates being absent or `null` upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id_posisi: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub posisi: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub deskripsi_posisi: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub jumlah_kuota: i64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub jumlah_terdaftar: i64,
    #[serde(default, deserialize_with = "string_list")]
    pub program_studi: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub jenjang: Vec<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub nama_perusahaan: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub kode_provinsi: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub nama_provinsi: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub kode_kabupaten: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub nama_kabupaten: String,
    #[serde(default, deserialize_with = "optional_string")]
    pub pendaftaran_awal: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub pendaftaran_akhir: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub mulai: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub selesai: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub agency: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sub_agency: String,
    #[serde(default, deserialize_with = "optional_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub updated_at: Option<String>,
    #[serde(default = "empty_object", deserialize_with = "object_or_empty")]
    pub source_raw: Value,
    #[serde(default, deserialize_with = "optional_string")]
    pub first_seen_at: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub last_synced_at: Option<String>,
    #[serde(default = "default_true", deserialize_with = "bool_or_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub url_original: String,
}

pub fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?;
    DateTime::parse_from_rfc3339(value).ok().map(|date| date.with_timezone(&Utc))
}

impl Vacancy {
    /// Identifier used for detail links: the position id when present, else the row id.
    pub fn detail_id(&self) -> &str {
        if self.id_posisi.is_empty() { &self.id } else { &self.id_posisi }
    }

    pub fn remaining_quota(&self) -> i64 {
        (self.jumlah_kuota - self.jumlah_terdaftar).max(0)
    }

    /// A missing start counts as "already started"; a missing end counts as "already closed".
    pub fn is_registration_open(&self, now: DateTime<Utc>) -> bool {
        let start = parse_timestamp(self.pendaftaran_awal.as_deref()).unwrap_or(DateTime::<Utc>::MIN_UTC);
        let Some(end) = parse_timestamp(self.pendaftaran_akhir.as_deref()) else {
            return false;
        };
        now >= start && now <= end
    }

    pub fn is_recent(&self, now: DateTime<Utc>) -> bool {
        match parse_timestamp(self.first_seen_at.as_deref()) {
            Some(first_seen) => now - first_seen <= Duration::hours(RECENT_WINDOW_HOURS),
            None => false,
        }
    }
}

/// Number of listings per education level, shown next to each level in the filter panel.
pub fn jenjang_preview(vacancies: &[Vacancy]) -> BTreeMap<String, usize> {
    let mut preview = BTreeMap::new();
    for vacancy in vacancies {
        for value in &vacancy.jenjang {
            *preview.entry(value.clone()).or_insert(0) += 1;
        }
    }
    preview
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProvince")]
pub struct Province {
    pub kode_provinsi: String,
    pub nama_provinsi: String,
}

/// The upstream spells the province keys both `provinsi` and `propinsi`.
#[derive(Debug, Default, Deserialize)]
struct RawProvince {
    #[serde(default, deserialize_with = "string_or_empty")]
    kode_provinsi: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    kode_propinsi: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    nama_provinsi: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    nama_propinsi: String,
}

impl From<RawProvince> for Province {
    fn from(raw: RawProvince) -> Self {
        let pick = |a: String, b: String| if a.is_empty() { b } else { a };
        Province {
            kode_provinsi: pick(raw.kode_provinsi, raw.kode_propinsi),
            nama_provinsi: pick(raw.nama_provinsi, raw.nama_propinsi),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kabupaten {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub nama_kabupaten: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_vacancy_payload_gets_defaults() {
        let vacancy: Vacancy = serde_json::from_str(r#"{"id_posisi": "123", "posisi": "Data Analyst"}"#).unwrap();
        assert_eq!(vacancy.id_posisi, "123");
        assert_eq!(vacancy.deskripsi_posisi, "");
        assert_eq!(vacancy.jumlah_kuota, 0);
        assert!(vacancy.program_studi.is_empty());
        assert!(vacancy.is_active);
        assert_eq!(vacancy.source_raw, serde_json::json!({}));
        assert_eq!(vacancy.pendaftaran_akhir, None);
    }

    #[test]
    fn nulls_and_numeric_strings_are_coerced() {
        let vacancy: Vacancy = serde_json::from_str(
            r#"{
                "id": null,
                "posisi": "Admin",
                "deskripsi_posisi": null,
                "jumlah_kuota": "5",
                "jumlah_terdaftar": null,
                "program_studi": ["Akuntansi", 3, null],
                "jenjang": null,
                "is_active": null,
                "source_raw": null,
                "created_at": null
            }"#,
        )
        .unwrap();
        assert_eq!(vacancy.id, "");
        assert_eq!(vacancy.jumlah_kuota, 5);
        assert_eq!(vacancy.jumlah_terdaftar, 0);
        assert_eq!(vacancy.program_studi, vec!["Akuntansi".to_string()]);
        assert!(vacancy.jenjang.is_empty());
        assert!(vacancy.is_active);
        assert_eq!(vacancy.created_at, None);
    }

    #[test]
    fn search_meta_defaults() {
        let response: SearchResponse = serde_json::from_str(r#"{"meta": {"total": "7"}, "data": []}"#).unwrap();
        assert_eq!(response.meta, SearchMeta { page: 1, limit: 20, total: 7 });
    }

    #[test]
    fn province_accepts_legacy_spelling() {
        let provinces: Vec<Province> = serde_json::from_str(
            r#"[{"kode_provinsi": "31", "nama_provinsi": "DKI Jakarta"}, {"kode_propinsi": "32", "nama_propinsi": "Jawa Barat"}, {}]"#,
        )
        .unwrap();
        assert_eq!(provinces[0].kode_provinsi, "31");
        assert_eq!(provinces[1].kode_provinsi, "32");
        assert_eq!(provinces[1].nama_provinsi, "Jawa Barat");
        assert_eq!(provinces[2].kode_provinsi, "");
    }

    #[test]
    fn registration_window_and_recency() {
        let now = parse_timestamp(Some("2025-01-10T00:00:00Z")).unwrap();
        let mut vacancy: Vacancy = serde_json::from_str(r#"{"posisi": "x"}"#).unwrap();
        assert!(!vacancy.is_registration_open(now));

        vacancy.pendaftaran_akhir = Some("2025-02-01T00:00:00.000Z".to_string());
        assert!(vacancy.is_registration_open(now));
        vacancy.pendaftaran_awal = Some("2025-01-11T00:00:00Z".to_string());
        assert!(!vacancy.is_registration_open(now));

        vacancy.first_seen_at = Some("2025-01-08T00:00:00Z".to_string());
        assert!(vacancy.is_recent(now));
        vacancy.first_seen_at = Some("2025-01-06T23:00:00Z".to_string());
        assert!(!vacancy.is_recent(now));
    }

    #[test]
    fn counts_jenjang() {
        let vacancies: Vec<Vacancy> = serde_json::from_str(
            r#"[{"jenjang": ["Diploma", "Sarjana"]}, {"jenjang": ["Sarjana"]}, {}]"#,
        )
        .unwrap();
        let preview = jenjang_preview(&vacancies);
        assert_eq!(preview.get("Sarjana"), Some(&2));
        assert_eq!(preview.get("Diploma"), Some(&1));
        assert_eq!(preview.get("SMA"), None);
    }
}
