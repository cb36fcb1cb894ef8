//! AeroStream API client.
//!
//! Fetches flight records and aggregate statistics from the AeroStream
//! backend. The `get_*` and `fetch_*` operations never return an error: any
//! failure (network, non-2xx status, malformed body) is logged and replaced by
//! a fallback value. Payloads are passed through as decoded JSON without shape
//! validation.

use super::config::ApiConfig;
use super::error::{ApiError, Fetched};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

/// Body served at the backend root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// HTTP client for one AeroStream deployment.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, etc).
    pub fn with_http_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The `/flights` body as decoded, or an empty array if the request failed.
    pub async fn get_flights(&self) -> Value {
        self.fetch_flights().await.into_inner()
    }

    /// Statistics body, or `None` if the request failed.
    pub async fn get_stats(&self) -> Option<Value> {
        self.fetch_stats().await.into_inner()
    }

    pub async fn fetch_flights(&self) -> Fetched<Value> {
        match self.try_flights().await {
            Ok(flights) => Fetched::Live(flights),
            Err(e) => {
                error!(operation = "get_flights", error = %e, "error fetching flights");
                Fetched::Fallback(Value::Array(Vec::new()))
            }
        }
    }

    pub async fn fetch_stats(&self) -> Fetched<Option<Value>> {
        match self.try_stats().await {
            Ok(stats) => Fetched::Live(Some(stats)),
            Err(e) => {
                error!(operation = "get_stats", error = %e, "error fetching stats");
                Fetched::Fallback(None)
            }
        }
    }

    /// GET `{base_url}/flights`. Any JSON body is accepted; the service
    /// normally sends an array of flight records.
    pub async fn try_flights(&self) -> Result<Value, ApiError> {
        let url = self.config.endpoint_url("flights");
        self.get_json("flights", &url).await
    }

    /// GET `{base_url}/stats`. Any JSON body is accepted, including `null`.
    pub async fn try_stats(&self) -> Result<Value, ApiError> {
        let url = self.config.endpoint_url("stats");
        self.get_json("stats", &url).await
    }

    /// GET the root of the host serving the API.
    pub async fn check_health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("health", self.config.origin_url().as_str()).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: &str,
    ) -> Result<T, ApiError> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}
