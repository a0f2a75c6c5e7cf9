//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{AgendaApi, HealthApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Pauta API client
///
/// Wraps a configured `reqwest::Client` with a base URL and a single global
/// request timeout. The client is cheap to clone; clones share the underlying
/// connection pool and configuration. Each request carries a correlation ID
/// for tracing.
#[derive(Clone)]
pub struct PautaClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl PautaClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("pauta-api-client/0.1"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access the agenda (eixos/temas/proposicoes) endpoints
    #[must_use]
    pub fn agenda(&self) -> AgendaApi {
        AgendaApi::new(self.clone())
    }

    /// Access the backend health probe
    #[must_use]
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request against a path relative to the base URL
    ///
    /// A non-success status becomes [`ApiError::Status`]; transport failures
    /// (including the global timeout) become [`ApiError::Request`].
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = join_url(&self.config.base_url, path);
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let response = self
            .inner
            .get(&url)
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await?;
        debug!(
            request_id = %request_id,
            url = %url,
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "GET completed"
        );

        self.handle_response(response).await
    }

    /// Build a request builder for custom requests
    ///
    /// The returned builder targets `path` relative to the base URL and
    /// carries a fresh correlation ID. Send it through [`Self::execute_raw`]
    /// or directly via `reqwest`.
    pub fn request_builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = join_url(&self.config.base_url, path);
        self.request_builder_url(method, &url)
    }

    /// Build a request builder for an absolute URL
    pub fn request_builder_url(&self, method: Method, url: &str) -> RequestBuilder {
        let request_id = Uuid::new_v4().to_string();

        self.inner
            .request(method, url)
            .header(X_REQUEST_ID, &request_id)
    }

    /// Execute a request and return the raw response without status handling
    pub async fn execute_raw(&self, request: RequestBuilder) -> ApiResult<Response> {
        Ok(request.send().await?)
    }

    /// Handle an HTTP response and deserialize the body
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(ApiError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::status(status.as_u16(), message))
        }
    }
}

/// Join a base URL and a relative path with exactly one separator
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000/api", "/bi/eixos/"),
            "http://localhost:8000/api/bi/eixos/"
        );
        assert_eq!(
            join_url("http://localhost:8000/api/", "bi/temas/"),
            "http://localhost:8000/api/bi/temas/"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::default();
        let client = PautaClient::with_config(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("not-a-url");
        assert!(PautaClient::with_config(config).is_err());
    }
}
