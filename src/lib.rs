//! # Fast2FA Client
//!
//! Async Rust client for the Fast2FA phone verification API.
//! This crate issues a verification request for a phone number, then polls
//! the status endpoint until the user approves or denies the request on
//! their device, or a deadline elapses.
//!
//! The HTTP mechanism is an injected [`transport::Transport`] so it can be
//! substituted in tests; production use goes through [`transport::HttpTransport`]
//! (enabled by the default `http-transport` feature).
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use fast2fa::{ClientConfig, Fast2faClient, HttpTransport, VerificationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fast2fa::Error> {
//!     let config = ClientConfig::default();
//!     let transport = Arc::new(HttpTransport::new(config.request_timeout)?);
//!     let client = Fast2faClient::new(transport, config);
//!
//!     let request = VerificationRequest::new("my-app", "accesstoken123", "+14155552671")?;
//!     let approved = client
//!         .verify_and_wait_for_status(&request, Duration::from_secs(120))
//!         .await?;
//!     println!("approved: {}", approved);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod transport;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ClientConfig;
pub use domain::{MessageId, StatusResult, VerificationRequest, VerificationStatus};
pub use errors::{Error, Result};
pub use services::Fast2faClient;
pub use transport::{Transport, TransportError};

#[cfg(feature = "http-transport")]
pub use transport::HttpTransport;
