use crate::constants::METRICS_API;
use crate::models::MetricsResponse;
use crate::utils::encode_query_component;

/// Fetch a market snapshot for the given comma-separated symbols, passing
/// the cache lifetime through to the backend.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails
/// - The response status is not ok
/// - The response body cannot be deserialized
pub async fn fetch_metrics(tickers: &str, cache_ttl_secs: u32) -> Result<MetricsResponse, String> {
    let url = format!(
        "{METRICS_API}?tickers={}&ttl={cache_ttl_secs}",
        encode_query_component(tickers)
    );

    let response = reqwest::get(&url)
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status().as_u16()));
    }

    response
        .json::<MetricsResponse>()
        .await
        .map_err(|e| format!("Failed to deserialize: {e}"))
}
