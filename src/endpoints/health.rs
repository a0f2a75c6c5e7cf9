//! Backend health probe
//!
//! The backend exposes a plain-text liveness view at `/health/` on the server
//! root (one level above the `/api` prefix the collections live under). It
//! answers `OK` with status 200. The probe reports the observed status instead
//! of failing on a non-success answer.

use crate::client::PautaClient;
use crate::error::ApiResult;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Health check API interface
#[derive(Clone)]
pub struct HealthApi {
    client: PautaClient,
}

impl HealthApi {
    /// Create a new health API interface
    pub(crate) fn new(client: PautaClient) -> Self {
        Self { client }
    }

    /// Probe the backend liveness endpoint
    ///
    /// GET /health/
    ///
    /// Transport failures still error; a reachable backend answering any
    /// status is reported as an [`EndpointStatus`].
    pub async fn check(&self) -> ApiResult<EndpointStatus> {
        let url = format!("{}/health/", root_url(self.client.base_url()));
        let start = Instant::now();

        let request = self
            .client
            .request_builder_url(reqwest::Method::GET, &url);
        let response = self.client.execute_raw(request).await?;
        let elapsed = start.elapsed();

        Ok(EndpointStatus {
            url,
            status_code: response.status().as_u16(),
            response_time: elapsed,
            is_healthy: response.status().is_success(),
        })
    }
}

/// Strip the trailing `/api` prefix segment from the base URL, if present
fn root_url(base_url: &str) -> &str {
    let trimmed = base_url.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed)
}

/// Endpoint status information
#[derive(Debug, Clone, Serialize)]
pub struct EndpointStatus {
    /// URL that was probed
    pub url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Response time
    pub response_time: Duration,
    /// Whether the endpoint answered with a success status
    pub is_healthy: bool,
}
