//! Free campsites of one park.

use common::{camp_site::CampSite, search_request::SearchRequest};
use tracing::info;

use crate::{config::ServiceConfig, error::QueryFailure, http_utils::service_client::service_get_json};

pub async fn query_free_camp_sites(
    client: &reqwest::Client,
    config: &ServiceConfig,
    park_name: &str,
    request: &SearchRequest,
) -> Result<Vec<CampSite>, QueryFailure> {
    let url = config.free_camp_sites_url(park_name);
    let sites = service_get_json::<Vec<CampSite>>(client, url, &request.to_query()).await?;
    info!("free campsites: {} sites in {}", sites.len(), park_name);
    Ok(sites)
}
