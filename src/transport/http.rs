//! Production HTTP transport backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{Transport, TransportError};

/// HTTP transport for production use
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a per-request timeout.
    pub fn new(request_timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| TransportError::Request {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    async fn decode(response: reqwest::Response) -> Result<Value, TransportError> {
        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::MalformedResponse {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        debug!(url = url, "Sending POST request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                message: e.to_string(),
            })?;

        Self::decode(response).await
    }

    async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        debug!(url = url, "Sending GET request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                message: e.to_string(),
            })?;

        Self::decode(response).await
    }
}
