//! HTTP adapter for the activity gateway

use std::time::Duration;

use async_trait::async_trait;
use ecotrace_core::config::ClientConfig;
use ecotrace_core::error::{EcotraceError, Result};
use serde::Deserialize;

use crate::payload::{ActivityPayload, BulkActivitiesRequest};
use crate::ports::ActivityGateway;

/// Gateway that submits batches to the backend over HTTP
pub struct HttpGateway {
    /// Base URL for the backend API (e.g. "http://localhost:8000/api")
    base_url: String,

    /// HTTP client, preconfigured with a bounded request timeout
    client: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway with an explicit base URL and request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build().map_err(|e| {
            EcotraceError::Network {
                status: None,
                message: format!("Failed to build HTTP client: {}", e),
            }
        })?;

        Ok(Self { base_url: base_url.into(), client })
    }

    /// Create a gateway from resolved configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            config.api_base_url.value.clone(),
            Duration::from_secs(config.request_timeout_secs.value),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ActivityGateway for HttpGateway {
    async fn submit_batch(&self, activities: &[ActivityPayload]) -> Result<usize> {
        let request = BulkActivitiesRequest { activities: activities.to_vec() };

        tracing::debug!(count = activities.len(), "submitting activity batch");

        let response = self
            .client
            .post(format!("{}/activities/bulk", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| EcotraceError::Network {
                status: None,
                message: format!("Failed to reach backend at {}: {}", self.base_url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = server_message(&body)
                .unwrap_or_else(|| format!("Server returned {}", status));
            return Err(EcotraceError::Network { status: Some(status.as_u16()), message });
        }

        tracing::info!(count = activities.len(), "activity batch accepted");
        Ok(activities.len())
    }
}

/// Pull a human-readable message out of an error response body
///
/// Prefers a JSON `error`, `message`, or `detail` field; falls back to the
/// raw body text.
fn server_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
        detail: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.error.or(parsed.message).or(parsed.detail) {
            return Some(message);
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
