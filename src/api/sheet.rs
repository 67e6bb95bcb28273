/// Fetch the CSV export text for a sheet.
///
/// The export endpoint answers 404/403 for private or deleted sheets, so
/// the status check matters more than usual here.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not ok, or the
/// body cannot be read as text.
pub async fn fetch_sheet_csv(url: &str) -> Result<String, String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status().as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read body: {e}"))
}
