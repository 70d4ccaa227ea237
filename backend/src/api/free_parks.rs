//! Parks with free sites in the travel window.

use std::collections::HashSet;

use common::{park::Park, search_request::SearchRequest};
use tracing::{info, warn};

use crate::{config::ServiceConfig, error::QueryFailure, http_utils::service_client::service_get_json};

pub async fn query_free_parks(
    client: &reqwest::Client,
    config: &ServiceConfig,
    request: &SearchRequest,
) -> Result<Vec<Park>, QueryFailure> {
    let response = service_get_json::<Vec<Park>>(client, config.free_parks_url(), &request.to_query()).await?;
    let parks = dedup_park_names(response);
    info!("free parks: {} parks for {} .. {}", parks.len(), request.start_date(), request.end_date());
    Ok(parks)
}

/// Park names are unique within one result set; later duplicates are dropped.
fn dedup_park_names(parks: Vec<Park>) -> Vec<Park> {
    let mut present_names = HashSet::new();
    let mut result = Vec::with_capacity(parks.len());
    for park in parks {
        if present_names.contains(&park.park_name) {
            warn!("duplicate park in search result: {}", park.park_name);
            continue;
        }
        present_names.insert(park.park_name.clone());
        result.push(park);
    }
    result
}
