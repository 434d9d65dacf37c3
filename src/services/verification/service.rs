//! Fast2FA client: request initiation and status queries

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};
use urlencoding::encode;

use crate::config::ClientConfig;
use crate::domain::{MessageId, StatusResult, VerificationRequest, VerificationStatus};
use crate::errors::{Error, Result};
use crate::transport::{Transport, TransportError};
use crate::utils::mask_phone_number;

/// Wire shape of the verify response
///
/// On success the service returns `{ "id": ... }`; on a service-level
/// failure it returns `{ "message": ... }` instead. Both fields are optional
/// here so the error check can run before the identifier is extracted.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    id: Option<String>,
    message: Option<String>,
}

/// Wire shape of the status response
#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
}

/// Client for the Fast2FA phone verification API
///
/// Generic over the injected [`Transport`] so the HTTP mechanism can be
/// substituted in tests.
pub struct Fast2faClient<T: Transport> {
    transport: Arc<T>,
    config: ClientConfig,
}

impl<T: Transport> Fast2faClient<T> {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `transport` - HTTP capability used for all network access
    /// * `config` - Client configuration
    pub fn new(transport: Arc<T>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Initiate a verification request
    ///
    /// Sends exactly one request to the verify endpoint and returns the
    /// message identifier assigned by the service. No retries: every failure
    /// propagates immediately to the caller.
    ///
    /// # Errors
    ///
    /// * `Error::Service` - the response carried a service-reported `message`
    /// * `Error::Transport` - the call failed or the response did not match
    ///   the service contract
    pub async fn verify(&self, request: &VerificationRequest) -> Result<MessageId> {
        let url = format!(
            "{}/verify?id={}&accesstoken={}&phone={}",
            self.base_url(),
            encode(&request.id),
            encode(&request.access_token),
            encode(&request.phone),
        );

        // The service expects a JSON object body even when no payload is set.
        let body = request
            .payload
            .clone()
            .unwrap_or_else(|| Value::Object(Default::default()));

        debug!(
            id = %request.id,
            phone = %mask_phone_number(&request.phone),
            "Initiating verification request"
        );

        let data = self.transport.post_json(&url, &body).await?;
        let response: VerifyResponse =
            serde_json::from_value(data).map_err(|e| TransportError::MalformedResponse {
                message: format!("Undecodable verify response: {}", e),
            })?;

        // The error check must come first: the id field is absent on failure.
        if let Some(message) = response.message {
            error!(
                id = %request.id,
                phone = %mask_phone_number(&request.phone),
                message = %message,
                "Verification request rejected by service"
            );
            return Err(Error::Service { message });
        }

        match response.id {
            Some(id) => {
                debug!(message_id = %id, "Verification request accepted");
                Ok(MessageId::new(id))
            }
            None => Err(Error::Transport(TransportError::MalformedResponse {
                message: "Verify response carried neither id nor message".to_string(),
            })),
        }
    }

    /// Query the current status of a verification attempt.
    pub async fn get_status(&self, message_id: &MessageId) -> Result<StatusResult> {
        let url = format!(
            "{}/status?id={}",
            self.base_url(),
            encode(message_id.as_str()),
        );

        let data = self.transport.get_json(&url).await?;
        let response: StatusResponse =
            serde_json::from_value(data).map_err(|e| TransportError::MalformedResponse {
                message: format!("Undecodable status response: {}", e),
            })?;

        Ok(StatusResult {
            status: VerificationStatus::from(response.status),
        })
    }

    /// Initiate a verification request and wait for its resolution
    ///
    /// Composes [`verify`](Self::verify) and
    /// [`wait_for_status`](Self::wait_for_status), reducing the terminal
    /// status to `true` iff the user approved. `Error::Timeout` and
    /// `Error::Service` propagate unchanged.
    pub async fn verify_and_wait_for_status(
        &self,
        request: &VerificationRequest,
        timeout: std::time::Duration,
    ) -> Result<bool> {
        let message_id = self.verify(request).await?;
        let result = self.wait_for_status(&message_id, timeout).await?;
        Ok(result.status.is_approved())
    }

    /// Same as [`verify_and_wait_for_status`](Self::verify_and_wait_for_status)
    /// with the configured default session timeout.
    pub async fn verify_and_wait(&self, request: &VerificationRequest) -> Result<bool> {
        self.verify_and_wait_for_status(request, self.config.default_timeout)
            .await
    }
}
