//! Transport Seam
//!
//! The client never names a concrete HTTP implementation. Everything that
//! touches the network goes through the [`Transport`] trait: one capability,
//! "perform a request, get a JSON-decoded response". Production code uses
//! [`HttpTransport`]; tests substitute scripted mocks.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[cfg(feature = "http-transport")]
pub mod http;

#[cfg(feature = "http-transport")]
pub use http::HttpTransport;

/// Failures of the underlying call mechanism
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request itself failed (connection, TLS, HTTP-level failure).
    #[error("Request failed: {message}")]
    Request { message: String },

    /// The response body could not be decoded as JSON, or it did not
    /// match the service contract.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}

/// JSON-over-HTTP capability consumed by the client
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url` and decode the JSON response.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError>;

    /// GET `url` and decode the JSON response.
    async fn get_json(&self, url: &str) -> Result<Value, TransportError>;
}
