use common::search_result::Vacancy;

use crate::api_utils::magang_api_utils::MagangApiClient;

pub async fn fetch_vacancy_by_id(client: &MagangApiClient, id: &str) -> anyhow::Result<Vacancy> {
    let id = id.trim();
    if id.is_empty() {
        anyhow::bail!("Vacancy id is empty");
    }
    let url = client.endpoint(&["vacancies", id], &[] as &[(&str, String)])?;
    let vacancy = client.get_json::<Vacancy>(url).await?;
    tracing::info!("loaded vacancy {}", id);
    Ok(vacancy)
}
