use crate::infrastructure::{CliError, Result};
use conference_view_core::{TopicError, TopicResponse};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Native counterpart of the browser topic fetch
#[derive(Debug, Clone)]
pub struct TopicClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TopicClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CliError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch(&self) -> std::result::Result<TopicResponse, TopicError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching topic");

        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| TopicError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TopicError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TopicError::Network(e.to_string()))?;

        TopicResponse::parse(&body)
    }
}
