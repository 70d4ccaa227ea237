use common::api_response::ApiEnvelope;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::QueryFailure;

/// GET `url` with `query` and unwrap the `{"data": ...}` envelope.
pub async fn service_get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: Url,
    query: &[(&'static str, String)],
) -> Result<T, QueryFailure> {
    debug!("SEARCH SERVICE REQUEST: {} {:?}", url, query);
    let t0 = std::time::Instant::now();

    let response = client.get(url).query(query).send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        return Err(QueryFailure::from_response(status, &response_txt));
    }

    let dt_ms = t0.elapsed().as_millis() as u64;
    debug!("SEARCH SERVICE RESPONSE: len = {} ({}ms)", response_txt.len(), dt_ms);
    let response: ApiEnvelope<T> = serde_json::from_str(&response_txt).map_err(QueryFailure::malformed)?;
    Ok(response.data)
}
