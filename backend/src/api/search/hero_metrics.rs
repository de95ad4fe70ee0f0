use common::search_const::SortOrder;
use common::search_result::{HeroMetrics, SearchResponse};

use crate::api_utils::magang_api_utils::MagangApiClient;

/// Total listing count and the count of listings first seen recently, fetched concurrently.
pub async fn fetch_hero_metrics(client: &MagangApiClient) -> anyhow::Result<HeroMetrics> {
    let all_url = client.endpoint(
        &["search"],
        &[("limit", "1".to_string()), ("sort", SortOrder::Terbaru.as_str().to_string())],
    )?;
    let fresh_url = client.endpoint(&["search"], &[("limit", "1".to_string()), ("only_new", "true".to_string())])?;

    let (all, fresh) = futures::try_join!(
        client.get_json::<SearchResponse>(all_url),
        client.get_json::<SearchResponse>(fresh_url)
    )?;

    Ok(HeroMetrics { total: all.meta.total, new_count: fresh.meta.total })
}
