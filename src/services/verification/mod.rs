//! Phone Verification Client
//!
//! This module implements the verification flow against the Fast2FA API.
//!
//! ## Features
//!
//! - **Request Initiation**: issue a verification request and obtain the
//!   message identifier assigned by the service
//! - **Status Polling**: query the status endpoint at a fixed interval until
//!   the user approves or denies, bounded by a wall-clock deadline
//! - **Composed Flow**: initiate and poll in one call, reduced to a boolean
//!   approval flag
//! - **Injected Transport**: all network access goes through the
//!   [`Transport`](crate::transport::Transport) trait
//! - **Security**: phone numbers are masked in logs

pub mod poller;
pub mod service;

#[cfg(test)]
mod tests;

pub use poller::POLL_INTERVAL;
pub use service::Fast2faClient;
