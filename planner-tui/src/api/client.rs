use anyhow::{Context, Result};
use planner_core::{Analysis, TaskSnapshot};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::dto::{AnalyzeRequest, ErrorResponse, HealthResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // Trailing slash so relative joins keep any path prefix.
        let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .with_context(|| format!("Invalid API URL: {}", base_url))?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid API path: {}", path))
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .client
            .get(self.url("api/health")?)
            .send()
            .await
            .context("Health check request failed")?;
        Self::parse(response).await
    }

    /// Ask the service to analyze one day's tasks.
    pub async fn analyze(&self, tasks: &[TaskSnapshot]) -> Result<Analysis> {
        let response = self
            .client
            .post(self.url("api/analyze")?)
            .json(&AnalyzeRequest { tasks })
            .send()
            .await
            .context("Analyze request failed")?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            anyhow::bail!("Server returned {}: {}", status, message);
        }
        response
            .json::<T>()
            .await
            .context("Failed to parse server response")
    }
}
