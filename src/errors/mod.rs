//! Error types for the Fast2FA client.

use thiserror::Error;

use crate::transport::TransportError;

/// Client errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The service reported a failure in an otherwise successful exchange
    /// (a `message` field in the verify response).
    #[error("Service error: {message}")]
    Service { message: String },

    /// The deadline elapsed before a terminal status was observed.
    #[error("Verification timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    // Bridge to transport-level failures, surfaced verbatim
    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, Error>;
