//! Prometheus metrics for API observability.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder. The returned handle renders the
/// scrape payload for `GET /metrics`.
pub fn install_recorder() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

/// Record one handled API request, labelled by endpoint.
pub fn api_request(endpoint: &'static str) {
    counter!("http_requests_total", "endpoint" => endpoint).increment(1);
}
