//! Upload of the finished report to object storage.

use std::path::Path;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::info;

use finstat_core::models::config::UploadConfig;

/// URL of the report object under `endpoint`.
pub fn object_url(endpoint: &str, object_key: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        object_key.trim_start_matches('/')
    )
}

/// PUT the report to the configured endpoint.
///
/// Returns `Ok(false)` when no endpoint is configured.
pub async fn upload_report(config: &UploadConfig, report: &Path) -> anyhow::Result<bool> {
    let Some(endpoint) = config.endpoint.as_deref() else {
        info!("No upload endpoint configured, skipping upload");
        return Ok(false);
    };

    let url = object_url(endpoint, &config.object_key);
    let body = tokio::fs::read(report).await?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client
        .put(&url)
        .header(CONTENT_TYPE, "text/plain")
        .body(body)
        .send()
        .await?;

    if !response.status().is_success() {
        anyhow::bail!("Upload to {} failed with status {}", url, response.status());
    }

    info!("Report uploaded to {}", url);
    Ok(true)
}
