//! Status polling state machine
//!
//! Two logical activities race to resolution: the poll loop, which queries
//! the status endpoint once per [`POLL_INTERVAL`] until a terminal status
//! arrives, and the deadline, which bounds the whole session. The race is
//! expressed with `tokio::time::timeout`: a terminal resolution disarms the
//! deadline, and the deadline firing drops the poll-loop future at its next
//! suspension point. A session settles exactly once.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::domain::{MessageId, StatusResult};
use crate::errors::{Error, Result};
use crate::transport::Transport;

use super::service::Fast2faClient;

/// Fixed delay between consecutive status queries. Not configurable.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

impl<T: Transport> Fast2faClient<T> {
    /// Wait for a verification attempt to reach a terminal status
    ///
    /// Queries the status endpoint immediately, then once per
    /// [`POLL_INTERVAL`] while the status is `pending`. Queries are strictly
    /// sequential. No backoff, no attempt cap: only the `timeout` deadline
    /// bounds the loop.
    ///
    /// # Errors
    ///
    /// * `Error::Timeout` - the deadline elapsed before a terminal status
    ///   was observed
    /// * `Error::Transport` - a status query failed; the session aborts
    ///   without retrying
    pub async fn wait_for_status(
        &self,
        message_id: &MessageId,
        timeout: Duration,
    ) -> Result<StatusResult> {
        match tokio::time::timeout(timeout, self.poll_until_terminal(message_id)).await {
            Ok(result) => result,
            Err(_) => {
                let timeout_ms = timeout.as_millis() as u64;
                warn!(
                    message_id = %message_id,
                    timeout_ms = timeout_ms,
                    "Verification session timed out before a terminal status"
                );
                Err(Error::Timeout { timeout_ms })
            }
        }
    }

    /// Same as [`wait_for_status`](Self::wait_for_status) with the configured
    /// default session timeout.
    pub async fn wait_for_status_default(&self, message_id: &MessageId) -> Result<StatusResult> {
        self.wait_for_status(message_id, self.config().default_timeout)
            .await
    }

    async fn poll_until_terminal(&self, message_id: &MessageId) -> Result<StatusResult> {
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let result = self.get_status(message_id).await?;

            if result.status.is_terminal() {
                info!(
                    message_id = %message_id,
                    status = %result.status,
                    attempts = attempts,
                    "Verification resolved"
                );
                return Ok(result);
            }

            debug!(
                message_id = %message_id,
                attempt = attempts,
                "Status still pending"
            );
            sleep(POLL_INTERVAL).await;
        }
    }
}
