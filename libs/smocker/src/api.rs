//! HTTP client for the Smocker admin API

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info, warn};

use crate::error::{Result, SmockerError};
use crate::mock::Mock;

/// Default admin endpoint of a local Smocker instance
pub const DEFAULT_SMOCKER_URL: &str = "http://localhost:8081";

/// Operations a mock server must support for fixtures to be deployed
#[async_trait]
pub trait MockServerClient: Send + Sync {
    /// Drop all registered mocks and the call history
    async fn reset(&self) -> Result<()>;

    /// Register mocks given as an already serialized JSON array
    async fn add_mocks_json(&self, payload: String) -> Result<()>;

    async fn add_mocks(&self, mocks: &[Mock]) -> Result<()> {
        let payload = serde_json::to_string(mocks)?;
        self.add_mocks_json(payload).await
    }
}

/// Smocker admin API at `url`
#[derive(Debug, Clone)]
pub struct SmockerApi {
    url: String,
    client: Client,
}

impl SmockerApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        let url = url.into().trim_end_matches('/').to_string();
        Self { url, client }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn expect_ok(operation: &'static str, response: Response) -> Result<()> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        warn!(operation, status = status.as_u16(), body = %body, "Mock server rejected request");
        Err(SmockerError::Status {
            operation,
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl MockServerClient for SmockerApi {
    async fn reset(&self) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/reset", self.url))
            .query(&[("force", "true")])
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Self::expect_ok("reset", response).await?;
        info!(url = %self.url, "Mock server reset");
        Ok(())
    }

    async fn add_mocks_json(&self, payload: String) -> Result<()> {
        debug!(url = %self.url, bytes = payload.len(), "Submitting mocks");
        let response = self
            .client
            .post(format!("{}/mocks", self.url))
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        Self::expect_ok("add mocks", response).await
    }
}
