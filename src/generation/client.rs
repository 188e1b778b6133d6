use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{GeneratedContent, GenerationRequest, GenerationResult};
use crate::error::{GenerationError, Result};
use crate::options::ConfigStore;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote definition service
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl GenerationClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Replace the request deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Generate content for `word` using the options stored at call time.
    ///
    /// Blank input is rejected before any request is built. Exactly one
    /// request is made otherwise; nothing is retried. The word is sent with
    /// surrounding whitespace trimmed.
    pub async fn generate(&self, word: &str, store: &ConfigStore) -> GenerationResult {
        let word = word.trim();
        if word.is_empty() {
            info!("Skipping generation for empty word");
            return Err(GenerationError::EmptyInput);
        }

        let request = GenerationRequest::new(word, &store.get_config());
        info!("Requesting content for '{}'", request.word);
        debug!("Request: {:?}", request);

        let response = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport_error)?;
        debug!("Response ({}): {}", status, body);

        let content = parse_response(status, &body)?;
        info!("Received content for '{}'", request.word);
        Ok(content)
    }
}

fn classify_transport_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        warn!("Generation request timed out: {}", e);
        GenerationError::Timeout
    } else if e.is_connect() {
        warn!("Could not reach generation service: {}", e);
        GenerationError::ConnectionFailure
    } else {
        warn!("Generation request failed: {}", e);
        GenerationError::Unknown(e.to_string())
    }
}

/// Interpret a completed HTTP exchange
fn parse_response(status: StatusCode, body: &str) -> GenerationResult {
    if status != StatusCode::OK {
        warn!("Generation service returned status {}", status);
        return Err(GenerationError::ServiceStatus {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| GenerationError::Unknown(e.to_string()))?;

    if let Some(error) = value.get("error") {
        let message = match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        warn!("Generation service reported an error: {}", message);
        return Err(GenerationError::ServiceError(message));
    }

    serde_json::from_value::<GeneratedContent>(value)
        .map_err(|e| GenerationError::Unknown(e.to_string()))
}
