//! HTTP client for the magang listing API.

use std::sync::LazyLock;

use anyhow::Context;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::search::search_facets::FacetCache;
use crate::api_utils::api_config::ApiConfig;

/// Cheap to clone; clones share the connection pool and the facet caches.
#[derive(Clone)]
pub struct MagangApiClient {
    http: reqwest::Client,
    base_url: Url,
    facet_cache: FacetCache,
}

static SHARED_CLIENT: LazyLock<anyhow::Result<MagangApiClient>> = LazyLock::new(MagangApiClient::from_env);

/// The process-wide client configured from the environment. Every caller shares its
/// connection pool and facet caches.
pub fn shared_client() -> anyhow::Result<&'static MagangApiClient> {
    SHARED_CLIENT.as_ref().map_err(|e| anyhow::anyhow!("{e:#}"))
}

impl std::fmt::Debug for MagangApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagangApiClient").field("base_url", &self.base_url.as_str()).finish()
    }
}

impl MagangApiClient {
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url).with_context(|| format!("Invalid API base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot carry a path: {}", config.base_url);
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, base_url, facet_cache: FacetCache::default() })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn facet_cache(&self) -> &FacetCache {
        &self.facet_cache
    }

    /// Appends path segments (percent-encoded) to the base URL and sets the query pairs.
    pub fn endpoint<K: AsRef<str>>(&self, segments: &[&str], params: &[(K, String)]) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("API base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(key, value)| (key.as_ref(), value.as_str())));
        }
        Ok(url)
    }

    /// GET `url` and parse the body as JSON. Any non-success status is an error.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
        let t0 = std::time::Instant::now();
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;
        let status = response.status();
        let response_txt = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;
        if !status.is_success() {
            anyhow::bail!("Request failed with status {}: {}", status, url);
        }
        let dt_ms = t0.elapsed().as_millis();
        tracing::debug!("API GET {} -> {} ({} bytes in {}ms)", url, status, response_txt.len(), dt_ms);
        let parsed = serde_json::from_str::<T>(&response_txt)
            .with_context(|| format!("Invalid JSON response from {}", url))?;
        Ok(parsed)
    }
}
