use reqwest::StatusCode;
use serde::Deserialize;

use crate::client::{ApiError, HttpClient};
use crate::health::HealthCheck;

/// Client for the ash server.
///
/// The server exposes two endpoints:
/// - `GET /health` returns `{"status": ..., "model": ...}`
/// - `GET /generate?q=<text>` returns `{"command": ...}`
#[derive(Debug, Clone)]
pub struct AshClient {
    http: HttpClient,
}

// --- Response types ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub command: String,
}

impl AshClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:8765`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    /// GET `/health`
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.http.get_json("health", &[]).await
    }

    /// GET `/generate?q=<query>`
    pub async fn generate(&self, query: &str) -> Result<GenerateResponse, ApiError> {
        self.http.get_json("generate", &[("q", query)]).await
    }
}

impl HealthCheck for AshClient {
    async fn is_healthy(&self) -> Result<bool, ApiError> {
        let resp = self.http.send_get("health", &[]).await?;
        Ok(resp.status() == StatusCode::OK)
    }
}
