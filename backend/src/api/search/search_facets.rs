//! Region facets (provinces and kabupaten) with in-process caching.

use std::time::Duration;

use common::search_result::{Kabupaten, Province};
use moka::sync::Cache;

use crate::api_utils::magang_api_utils::MagangApiClient;

const PROVINCES_TTL: Duration = Duration::from_secs(60 * 60 * 12);
const KABUPATEN_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Clone)]
pub struct FacetCache {
    provinces: Cache<(), Vec<Province>>,
    kabupaten: Cache<String, Vec<Kabupaten>>,
}

impl Default for FacetCache {
    fn default() -> Self {
        Self {
            provinces: Cache::builder().max_capacity(1).time_to_live(PROVINCES_TTL).build(),
            kabupaten: Cache::builder().max_capacity(64).time_to_live(KABUPATEN_TTL).build(),
        }
    }
}

pub async fn fetch_provinces(client: &MagangApiClient) -> anyhow::Result<Vec<Province>> {
    let cache = &client.facet_cache().provinces;
    if let Some(provinces) = cache.get(&()) {
        tracing::debug!("provinces cache hit");
        return Ok(provinces);
    }
    let url = client.endpoint(&["facets", "provinces"], &[] as &[(&str, String)])?;
    let provinces: Vec<Province> = client.get_json(url).await?;
    cache.insert((), provinces.clone());
    Ok(provinces)
}

/// Kabupaten of one province. An empty province code yields an empty list without a request.
pub async fn fetch_kabupaten(client: &MagangApiClient, kode_provinsi: &str) -> anyhow::Result<Vec<Kabupaten>> {
    let kode_provinsi = kode_provinsi.trim();
    if kode_provinsi.is_empty() {
        return Ok(Vec::new());
    }
    let cache = &client.facet_cache().kabupaten;
    if let Some(kabupaten) = cache.get(kode_provinsi) {
        tracing::debug!("kabupaten cache hit for {}", kode_provinsi);
        return Ok(kabupaten);
    }
    let url = client.endpoint(&["facets", "kabupaten"], &[("kode_provinsi", kode_provinsi.to_string())])?;
    let kabupaten: Vec<Kabupaten> = client.get_json(url).await?;
    cache.insert(kode_provinsi.to_string(), kabupaten.clone());
    Ok(kabupaten)
}
